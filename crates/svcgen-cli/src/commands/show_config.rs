//! `svcgen --show-config`: print the effective configuration.

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let rendered = config
        .to_toml()
        .with_cli_context(|| "failed to render configuration")?;

    output.header(&format!("# {}", AppConfig::config_path().display()))?;
    output.print(rendered.trim_end())?;
    Ok(())
}
