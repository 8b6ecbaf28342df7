use std::io;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Directives used when `RUST_LOG` is not set.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "rental_agency=debug,info"
    } else {
        "rental_agency=info"
    }
}

/// Logs go to stderr so reports on stdout stay machine-readable.
fn base_layer<S>() -> fmt::Layer<S, DefaultFields, Format, fn() -> io::Stderr> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(io::stderr as fn() -> io::Stderr)
}

pub fn init_logger(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let layer = match format {
        LogFormat::Compact => base_layer().compact().boxed(),
        LogFormat::Json => base_layer().json().boxed(),
    };

    tracing_subscriber::registry().with(layer).with(filter).init();
}
