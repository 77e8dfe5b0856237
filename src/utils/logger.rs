use tracing_subscriber::fmt::{self, format::DefaultFields};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins when set, otherwise `default` applies.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "quicksite=debug,info"
    } else {
        "quicksite=info"
    }
}

fn base_layer<S>() -> fmt::Layer<S, DefaultFields> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(default_directive(verbose)))
        .with(base_layer().compact())
        .init();
}

/// JSON lines instead of the compact format, for piping scenario runs into other tools.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(default_directive(false)))
        .with(base_layer().json())
        .init();
}
