//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No generation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "droidwrap",
    bin_name = "droidwrap",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4f1} Wrap any website in a ready-to-build Android app",
    long_about = "Droidwrap generates a complete Android Gradle project whose \
                  single activity is a WebView pointed at your site.",
    after_help = "EXAMPLES:\n\
        \x20 droidwrap generate --app-name \"My Clinic\" --package com.example.clinic --url https://clinic.example.com/home\n\
        \x20 droidwrap generate --url https://example.com --app-name Example --package com.example.app --output ./build/android\n\
        \x20 droidwrap files --format json\n\
        \x20 droidwrap completions bash > /usr/share/bash-completion/completions/droidwrap",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the Android project tree.
    #[command(
        visible_alias = "gen",
        about = "Generate the Android project",
        after_help = "EXAMPLES:\n\
            \x20 droidwrap generate --app-name \"My Clinic\" --package com.example.clinic --url https://clinic.example.com/home\n\
            \x20 droidwrap generate --version-code 3 --version-name 1.2.0 --yes\n\
            \x20 droidwrap generate --dry-run"
    )]
    Generate(GenerateArgs),

    /// List the files a generation would produce.
    #[command(
        visible_alias = "ls",
        about = "List generated file paths",
        after_help = "EXAMPLES:\n\
            \x20 droidwrap files\n\
            \x20 droidwrap files --format json"
    )]
    Files(FilesArgs),

    /// Initialise a Droidwrap configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 droidwrap init           # default location\n\
            \x20 droidwrap init --force   # overwrite existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 droidwrap completions bash > ~/.local/share/bash-completion/completions/droidwrap\n\
            \x20 droidwrap completions zsh  > ~/.zfunc/_droidwrap\n\
            \x20 droidwrap completions fish > ~/.config/fish/completions/droidwrap.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Droidwrap configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 droidwrap config get defaults.server_url\n\
            \x20 droidwrap config set defaults.app_name \"My Clinic\"\n\
            \x20 droidwrap config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `droidwrap generate`.
///
/// `--app-name`, `--package`, and `--url` fall back to the config file's
/// `[defaults]` section; everything else also has built-in defaults.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Human-readable application name.
    #[arg(long = "app-name", value_name = "NAME", help = "Application name")]
    pub app_name: Option<String>,

    /// Reverse-DNS package identifier.
    #[arg(
        short = 'p',
        long = "package",
        value_name = "PACKAGE",
        help = "Android package name (e.g. com.example.app)"
    )]
    pub package_name: Option<String>,

    /// URL the generated app loads on start.
    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        help = "Server URL the app will load"
    )]
    pub server_url: Option<String>,

    /// Site domain for asset-link verification.  Derived from the URL when
    /// omitted; must match its host when given.
    #[arg(long = "domain", value_name = "HOST", help = "Site domain (derived from --url)")]
    pub domain: Option<String>,

    /// Numeric version code (positive, increases per release).
    #[arg(long = "version-code", value_name = "N", help = "Android versionCode")]
    pub version_code: Option<u32>,

    /// Human-readable version string.
    #[arg(long = "version-name", value_name = "VERSION", help = "Android versionName")]
    pub version_name: Option<String>,

    /// Minimum supported SDK level.
    #[arg(long = "min-sdk", value_name = "LEVEL", help = "Minimum SDK level")]
    pub min_sdk: Option<u32>,

    /// Target SDK level.
    #[arg(long = "target-sdk", value_name = "LEVEL", help = "Target SDK level")]
    pub target_sdk: Option<u32>,

    /// Compile SDK level.
    #[arg(long = "compile-sdk", value_name = "LEVEL", help = "Compile SDK level")]
    pub compile_sdk: Option<u32>,

    /// Output directory.  Deleted and recreated on every run.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: ./android-webview)"
    )]
    pub output: Option<PathBuf>,

    /// Skip the confirmation prompt before deleting an existing tree.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and regenerate immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── files ─────────────────────────────────────────────────────────────────────

/// Arguments for `droidwrap files`.
#[derive(Debug, Args)]
pub struct FilesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: FilesFormat,
}

/// Output format for the `files` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FilesFormat {
    /// Human-readable listing with a header.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `droidwrap init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `droidwrap completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `droidwrap config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.server_url`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "droidwrap",
            "generate",
            "--app-name",
            "My Clinic",
            "--package",
            "com.example.clinic",
            "--url",
            "https://clinic.example.com/home",
        ]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn generate_alias_gen() {
        let cli = Cli::parse_from(["droidwrap", "gen", "--dry-run"]);
        if let Commands::Generate(args) = cli.command {
            assert!(args.dry_run);
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn generate_parses_numeric_fields() {
        let cli = Cli::parse_from([
            "droidwrap",
            "generate",
            "--version-code",
            "3",
            "--min-sdk",
            "26",
        ]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.version_code, Some(3));
            assert_eq!(args.min_sdk, Some(26));
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn files_defaults_to_table() {
        let cli = Cli::parse_from(["droidwrap", "files"]);
        if let Commands::Files(args) = cli.command {
            assert!(matches!(args.format, FilesFormat::Table));
        } else {
            panic!("expected Files command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["droidwrap", "--quiet", "--verbose", "files"]);
        assert!(result.is_err());
    }
}
