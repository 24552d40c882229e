//! Implementation of the `droidwrap generate` command.
//!
//! Responsibility: merge CLI flags with config-file defaults into a
//! `GenerationConfig`, confirm the destructive wipe, call the core scaffold
//! service, and display results. No generation logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use droidwrap_adapters::{LocalFilesystem, registry};
use droidwrap_core::{
    application::ScaffoldService,
    domain::{GenerationConfig, RenderContext, render_tree},
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Output directory when neither `--output` nor `defaults.output_dir` is set.
const DEFAULT_OUTPUT_DIR: &str = "android-webview";

/// Execute the `droidwrap generate` command.
///
/// Dispatch sequence:
/// 1. Merge flags and config defaults into a validated `GenerationConfig`
/// 2. Resolve the output directory
/// 3. Early-exit if `--dry-run`
/// 4. Confirm the wipe when the directory already exists (unless `--yes`)
/// 5. Execute generation via `ScaffoldService`
/// 6. Print the generated paths and next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Build the generation config (flags win over file defaults).
    let gen_config = build_generation_config(&args, &config)?;

    debug!(
        app = gen_config.app_name(),
        package = gen_config.package_name(),
        url = gen_config.server_url(),
        domain = gen_config.domain(),
        "Configuration resolved"
    );

    // 2. Resolve output directory.
    let root = args
        .output
        .clone()
        .or_else(|| config.defaults.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        return dry_run(&gen_config, &root, &output);
    }

    // 4. The wipe is destructive; ask before touching an existing tree.
    if root.exists() && !args.yes && !global.quiet {
        output.warning(&format!(
            "'{}' already exists and will be deleted.",
            root.display(),
        ))?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Generate.
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    output.header(&format!("Generating Android project in '{}'...", root.display()))?;
    info!(root = %root.display(), "Generation started");

    let report = service
        .generate(&gen_config, registry::webview_app(), &root)
        .map_err(CliError::Core)?;

    // 6. Summary: every path, then the target URL.
    for file in &report.files {
        output.print(&format!("  {}", file.display()))?;
    }

    output.success(&format!(
        "Generated {} files in '{}'",
        report.file_count(),
        report.root.display(),
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print(&format!("App will load: {}", report.server_url))?;
        output.print(&format!(
            "Build instructions: {}",
            report.root.join("BUILD_INSTRUCTIONS.md").display(),
        ))?;
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", report.root.display()))?;
        output.print("  ./gradlew assembleDebug")?;
    }

    Ok(())
}

// ── Config merging ────────────────────────────────────────────────────────────

/// Merge CLI flags with config-file defaults.
///
/// Required fields (`--app-name`, `--package`, `--url`) surface a
/// `MissingField` error naming the flag when absent from both sources;
/// everything else falls through to the builder's built-in defaults.
fn build_generation_config(args: &GenerateArgs, config: &AppConfig) -> CliResult<GenerationConfig> {
    let defaults = &config.defaults;

    let app_name = args
        .app_name
        .clone()
        .or_else(|| defaults.app_name.clone())
        .ok_or(CliError::MissingField { field: "--app-name" })?;
    let package_name = args
        .package_name
        .clone()
        .or_else(|| defaults.package_name.clone())
        .ok_or(CliError::MissingField { field: "--package" })?;
    let server_url = args
        .server_url
        .clone()
        .or_else(|| defaults.server_url.clone())
        .ok_or(CliError::MissingField { field: "--url" })?;

    let mut builder = GenerationConfig::builder()
        .app_name(app_name)
        .package_name(package_name)
        .server_url(server_url);

    if let Some(domain) = args.domain.clone().or_else(|| defaults.domain.clone()) {
        builder = builder.domain(domain);
    }
    if let Some(code) = args.version_code.or(defaults.version_code) {
        builder = builder.version_code(code);
    }
    if let Some(name) = args.version_name.clone().or_else(|| defaults.version_name.clone()) {
        builder = builder.version_name(name);
    }
    if let Some(level) = args.min_sdk.or(defaults.min_sdk) {
        builder = builder.min_sdk(level);
    }
    if let Some(level) = args.target_sdk.or(defaults.target_sdk) {
        builder = builder.target_sdk(level);
    }
    if let Some(level) = args.compile_sdk.or(defaults.compile_sdk) {
        builder = builder.compile_sdk(level);
    }

    builder.build().map_err(|e| CliError::Core(e.into()))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

/// Render the registry without writing and list the would-be paths.
fn dry_run(config: &GenerationConfig, root: &Path, output: &OutputManager) -> CliResult<()> {
    let ctx = RenderContext::from_config(config);
    let tree = render_tree(registry::webview_app(), &ctx, root)
        .map_err(|e| CliError::Core(e.into()))?;

    output.info(&format!(
        "Dry run: would write {} files under '{}'",
        tree.file_count(),
        root.display(),
    ))?;
    for file in tree.files() {
        output.print(&format!("  {}", file.path.display()))?;
    }
    output.info(&format!("App would load: {}", config.server_url()))?;

    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [y/N] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
