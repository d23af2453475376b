use std::io;

use anyhow::Context;
use tracing::info;

use payroll_roster::config::ConfigLoader;
use payroll_roster::logging::init_tracing;
use payroll_roster::shell::{AppContext, TerminalPrompter, run};

fn main() -> anyhow::Result<()> {
    let loader = ConfigLoader::from_env().context("loading payroll configuration")?;
    let source = loader.source().map(|path| path.display().to_string());
    let config = loader.into_config();

    init_tracing(&config)?;
    info!(config = source.as_deref().unwrap_or("defaults"), "Configuration loaded");

    let stdin = io::stdin();
    let mut ui = TerminalPrompter::new(stdin.lock(), io::stdout(), config.title.clone());
    let mut ctx = AppContext::new(config);
    run(&mut ctx, &mut ui);
    Ok(())
}
