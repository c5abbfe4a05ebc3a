use ferrous_zone_domain::{CliOverrides, Config};

/// Load, override and validate; nothing is logged yet because logging
/// depends on the result.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
