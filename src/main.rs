use anyhow::Context;
use clap::Parser;
use rental_agency::utils::logger::{self, LogFormat};
use rental_agency::utils::validation::Validate;
use rental_agency::{render_selection, AgencyError, CliConfig, FleetConfig, Rentable};

fn main() {
    let config = CliConfig::parse();

    let log_format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, log_format);

    tracing::info!("Starting rental-agency CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        let exit_code = match e.downcast_ref::<AgencyError>() {
            Some(agency_error) => {
                tracing::error!("❌ {:#} (Category: {:?})", e, agency_error.category());
                agency_error.exit_code()
            }
            None => {
                tracing::error!("❌ {:#}", e);
                1
            }
        };
        eprintln!("❌ {:#}", e);
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    config.validate()?;

    let fleet = FleetConfig::from_file(&config.fleet)
        .with_context(|| format!("Failed to load fleet file {}", config.fleet.display()))?;
    fleet.validate()?;

    let clock = fleet.clock(config.current_year);
    let agency = fleet
        .build_agency(clock)
        .with_context(|| format!("Failed to build agency '{}'", fleet.agency.name))?;

    let criterion = config.criterion();
    let report = render_selection(&agency, criterion.as_ref(), config.format)?;
    print!("{}", report);

    let rented = agency.all_rented_vehicles();
    tracing::info!("📊 {} of {} vehicles currently rented", rented.len(), agency.len());
    for vehicle in rented {
        tracing::info!("🔑 Rented: {}", vehicle.describe());
    }

    Ok(())
}
