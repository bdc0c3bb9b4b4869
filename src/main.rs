use std::io;
use std::process::ExitCode;

use teaching_collections::driver::{self, DriverError};
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    setup_logging();

    match driver::run_session(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        },
    }
}

/// Logs go to stderr so that stdout only ever holds the session itself. `RUST_LOG` overrides the
/// default level of `warn`.
fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_thread_names(false),
        )
        .with(env_filter)
        .init();
}

fn report(e: &DriverError) {
    match e {
        DriverError::Io(err) => error!(%err, "failed to read or write the session"),
        DriverError::Parse(err) => error!(%err, "expected an integer"),
        DriverError::EmptyTree(err) => error!(%err, "no keys were inserted"),
    }
}
