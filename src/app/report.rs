use crate::domain::agency::RentalAgency;
use crate::domain::criteria::Criterion;
use crate::domain::model::{format_price, VehicleSummary};
use crate::utils::error::{AgencyError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for ReportFormat {
    type Err = AgencyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(AgencyError::ConfigError {
                field: "format".to_string(),
                message: format!("Unsupported report format: {}", other),
            }),
        }
    }
}

/// Renders the vehicles matching `criterion` in the requested format.
pub fn render_selection<C>(agency: &RentalAgency, criterion: &C, format: ReportFormat) -> Result<String>
where
    C: Criterion + ?Sized,
{
    match format {
        ReportFormat::Text => Ok(render_text(&agency.describe_selected(criterion))),
        ReportFormat::Json => render_json(&agency.summaries(criterion)),
        ReportFormat::Csv => render_csv(&agency.summaries(criterion)),
    }
}

fn render_text(lines: &[String]) -> String {
    let mut output = String::new();
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    output
}

fn render_json(summaries: &[VehicleSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}

fn render_csv(summaries: &[VehicleSummary]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "type",
        "brand",
        "model",
        "production_year",
        "detail",
        "daily_rental_price",
        "rented",
    ])?;

    for summary in summaries {
        writer.write_record([
            summary.kind.to_string(),
            summary.brand.clone(),
            summary.model.clone(),
            summary.production_year.to_string(),
            summary.detail.clone(),
            format_price(summary.daily_rental_price),
            summary.rented.to_string(),
        ])?;
    }

    let data = writer.into_inner().map_err(|e| AgencyError::IoError(e.into_error()))?;
    String::from_utf8(data).map_err(|e| AgencyError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
