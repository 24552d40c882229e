//! Implementation of the `droidwrap files` command.
//!
//! Lists the paths a generation would produce, rendered against the config
//! file's defaults (placeholder values stand in for anything unset, so the
//! listing works before any configuration exists).

use droidwrap_adapters::registry;
use droidwrap_core::domain::{GenerationConfig, RenderContext};

use crate::{
    cli::{FilesArgs, FilesFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: FilesArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let paths = rendered_paths(&config)?;

    match args.format {
        FilesFormat::Table => {
            output.header("Generated files:")?;
            for path in &paths {
                output.print(&format!("  {path}"))?;
            }
            output.print(&format!("({} files)", paths.len()))?;
        }

        FilesFormat::List => {
            for path in &paths {
                println!("{path}");
            }
        }

        FilesFormat::Json => {
            // Written straight to stdout (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&paths).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise file list: {e}"),
                source: Some(Box::new(e)),
            })?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Registry paths rendered for the effective config.
fn rendered_paths(config: &AppConfig) -> CliResult<Vec<String>> {
    let gen_config = listing_config(config).map_err(|e| CliError::Core(e.into()))?;
    let ctx = RenderContext::from_config(&gen_config);

    Ok(registry::webview_app()
        .iter()
        .map(|entry| ctx.render(entry.path))
        .collect())
}

/// Config-file defaults with placeholders for whatever is unset.
fn listing_config(
    config: &AppConfig,
) -> Result<GenerationConfig, droidwrap_core::domain::DomainError> {
    let defaults = &config.defaults;

    GenerationConfig::builder()
        .app_name(defaults.app_name.clone().unwrap_or_else(|| "Example".into()))
        .package_name(
            defaults
                .package_name
                .clone()
                .unwrap_or_else(|| "com.example.app".into()),
        )
        .server_url(
            defaults
                .server_url
                .clone()
                .unwrap_or_else(|| "https://example.com/".into()),
        )
        .build()
}

// ── tests ─────────────────────────────────────────────────────────────────────
