use std::io;

use dispatch_core::DispatchError;
use dispatch_core::config::RunConfig;
use dispatch_core::driver::{Roster, run};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // stdout はレポート専用なので、ログは stderr に出す
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run the standard roster with `config` and write the report to `out`.
fn report(config: RunConfig, out: impl io::Write) -> Result<(), DispatchError> {
    let strategy = config.strategy.build();
    debug!(strategy = strategy.name(), "starting");

    let transcript = run(&Roster::standard(), strategy.as_ref())?;
    transcript.write_to(out)
}

fn main() -> Result<(), DispatchError> {
    init_tracing();
    report(RunConfig::from_env(), io::stdout().lock())
}
