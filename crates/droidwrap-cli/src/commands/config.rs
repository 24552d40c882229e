//! `droidwrap config` — read and write configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let config_path = global.config.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let mut updated = config;
            set_config_value(&mut updated, &key, &value)?;
            updated.save(&config_path).map_err(|e| CliError::ConfigError {
                message: format!("Failed to persist config: {e}"),
                source: None,
            })?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&config_path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let d = &config.defaults;
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    let num = |v: &Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();

    match key {
        "defaults.app_name" => Ok(opt(&d.app_name)),
        "defaults.package_name" => Ok(opt(&d.package_name)),
        "defaults.server_url" => Ok(opt(&d.server_url)),
        "defaults.domain" => Ok(opt(&d.domain)),
        "defaults.version_code" => Ok(num(&d.version_code)),
        "defaults.version_name" => Ok(opt(&d.version_name)),
        "defaults.min_sdk" => Ok(num(&d.min_sdk)),
        "defaults.target_sdk" => Ok(num(&d.target_sdk)),
        "defaults.compile_sdk" => Ok(num(&d.compile_sdk)),
        "defaults.output_dir" => Ok(d
            .output_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(unknown_key(key)),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    let parse_u32 = |value: &str| {
        value.parse::<u32>().map_err(|e| CliError::ConfigError {
            message: format!("'{value}' is not a valid number for '{key}': {e}"),
            source: None,
        })
    };

    let d = &mut config.defaults;
    match key {
        "defaults.app_name" => d.app_name = Some(value.into()),
        "defaults.package_name" => d.package_name = Some(value.into()),
        "defaults.server_url" => d.server_url = Some(value.into()),
        "defaults.domain" => d.domain = Some(value.into()),
        "defaults.version_code" => d.version_code = Some(parse_u32(value)?),
        "defaults.version_name" => d.version_name = Some(value.into()),
        "defaults.min_sdk" => d.min_sdk = Some(parse_u32(value)?),
        "defaults.target_sdk" => d.target_sdk = Some(parse_u32(value)?),
        "defaults.compile_sdk" => d.compile_sdk = Some(parse_u32(value)?),
        "defaults.output_dir" => d.output_dir = Some(value.into()),
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("'{value}' is not a valid boolean for '{key}'"),
                source: None,
            })?;
        }
        "output.format" => config.output.format = value.into(),
        _ => return Err(unknown_key(key)),
    }

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
