//! Template entries and the substitution renderer.
//!
//! A [`TemplateEntry`] maps a relative output path to a content payload; both
//! are `&'static str` patterns carrying `{{VAR}}` placeholders. Entries are
//! stateless and owned by the static registry in the adapters crate, so one
//! table serves any number of generations.
//!
//! Rendering is plain variable substitution via [`RenderContext`]: the
//! variable map is derived once from a [`GenerationConfig`] and applied by
//! linear replacement. Rendering is pure — same config in, same text out —
//! which is what makes generated trees byte-stable between runs.
//!
//! ## Substitution Variables
//!
//! | Variable | Example |
//! |----------|---------|
//! | `APP_NAME` | "Example Hospital" |
//! | `PACKAGE_NAME` | "test.hospital.app" |
//! | `PACKAGE_PATH` | "test/hospital/app" |
//! | `VERSION_CODE` | "2" |
//! | `VERSION_NAME` | "1.1.0" |
//! | `MIN_SDK` / `TARGET_SDK` / `COMPILE_SDK` | "24" / "34" / "34" |
//! | `SERVER_URL` | "https://www.example-hospital.test/home" |
//! | `DOMAIN` | "www.example-hospital.test" |
//! | `THEME` | "ExampleHospital" |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::{
    config::GenerationConfig,
    error::DomainError,
    output_tree::OutputTree,
};

/// A mapping from an output-relative path to its content template.
///
/// Both fields may reference substitution variables; the path typically only
/// needs `{{PACKAGE_PATH}}` for the Java source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    pub path: &'static str,
    pub content: &'static str,
}

impl TemplateEntry {
    pub const fn new(path: &'static str, content: &'static str) -> Self {
        Self { path, content }
    }
}

/// Variable map for template rendering.
///
/// A value object: immutable after construction, derived entirely from a
/// [`GenerationConfig`]. Unknown placeholders are left intact so a stray
/// `{{` in payload text never corrupts output silently — it shows up
/// verbatim and gets caught by the registry tests.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<&'static str, String>,
}

impl RenderContext {
    /// Derive the full variable map from a validated configuration.
    pub fn from_config(config: &GenerationConfig) -> Self {
        let mut vars = HashMap::new();

        vars.insert("APP_NAME", config.app_name().to_string());
        vars.insert("PACKAGE_NAME", config.package_name().to_string());
        vars.insert("PACKAGE_PATH", config.package_path());
        vars.insert("VERSION_CODE", config.version_code().to_string());
        vars.insert("VERSION_NAME", config.version_name().to_string());
        vars.insert("MIN_SDK", config.min_sdk().to_string());
        vars.insert("TARGET_SDK", config.target_sdk().to_string());
        vars.insert("COMPILE_SDK", config.compile_sdk().to_string());
        vars.insert("SERVER_URL", config.server_url().to_string());
        vars.insert("DOMAIN", config.domain().to_string());
        vars.insert("THEME", config.theme_name());

        Self { variables: vars }
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Single-pass replacement; order doesn't matter because no variable
    /// value contains another placeholder.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// Render every entry against a configuration into a validated [`OutputTree`].
///
/// Content is trimmed of leading and trailing whitespace so payload literals
/// can be written with comfortable margins. This is the pure half of a
/// generation: nothing here touches the filesystem.
pub fn render_tree(
    entries: &[TemplateEntry],
    ctx: &RenderContext,
    root: &Path,
) -> Result<OutputTree, DomainError> {
    let mut tree = OutputTree::new(root);

    for entry in entries {
        let path = PathBuf::from(ctx.render(entry.path));
        let content = ctx.render(entry.content).trim().to_string();
        tree.push(path, content);
    }

    tree.validate()?;
    Ok(tree)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> GenerationConfig {
        GenerationConfig::builder()
            .app_name("Example Hospital")
            .package_name("test.hospital.app")
            .version_code(2)
            .version_name("1.1.0")
            .server_url("https://www.example-hospital.test/home")
            .build()
            .unwrap()
    }

    #[test]
    fn context_exposes_all_variables() {
        let ctx = RenderContext::from_config(&sample_config());

        assert_eq!(ctx.get("APP_NAME"), Some("Example Hospital"));
        assert_eq!(ctx.get("PACKAGE_NAME"), Some("test.hospital.app"));
        assert_eq!(ctx.get("PACKAGE_PATH"), Some("test/hospital/app"));
        assert_eq!(ctx.get("VERSION_CODE"), Some("2"));
        assert_eq!(ctx.get("VERSION_NAME"), Some("1.1.0"));
        assert_eq!(ctx.get("MIN_SDK"), Some("24"));
        assert_eq!(ctx.get("TARGET_SDK"), Some("34"));
        assert_eq!(ctx.get("COMPILE_SDK"), Some("34"));
        assert_eq!(
            ctx.get("SERVER_URL"),
            Some("https://www.example-hospital.test/home")
        );
        assert_eq!(ctx.get("DOMAIN"), Some("www.example-hospital.test"));
        assert_eq!(ctx.get("THEME"), Some("ExampleHospital"));
    }

    #[test]
    fn render_replaces_placeholders() {
        let ctx = RenderContext::from_config(&sample_config());
        assert_eq!(
            ctx.render("applicationId \"{{PACKAGE_NAME}}\""),
            "applicationId \"test.hospital.app\""
        );
    }

    #[test]
    fn render_replaces_repeated_placeholders() {
        let ctx = RenderContext::from_config(&sample_config());
        assert_eq!(
            ctx.render("{{MIN_SDK}}-{{MIN_SDK}}"),
            "24-24"
        );
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let ctx = RenderContext::from_config(&sample_config());
        assert_eq!(ctx.render("{{UNKNOWN}}"), "{{UNKNOWN}}");
    }

    #[test]
    fn render_leaves_single_braces_alone() {
        // Gradle and Java payloads are full of single braces.
        let ctx = RenderContext::from_config(&sample_config());
        assert_eq!(ctx.render("android { }"), "android { }");
    }

    // Rendering twice with the same config yields identical text: no hidden
    // timestamps, counters, or randomness.
    #[test]
    fn rendering_is_pure() {
        let config = sample_config();
        let template = "url={{SERVER_URL}} code={{VERSION_CODE}} theme={{THEME}}";

        let first = RenderContext::from_config(&config).render(template);
        let second = RenderContext::from_config(&config).render(template);
        assert_eq!(first, second);
    }

    // ── render_tree ───────────────────────────────────────────────────────

    const ENTRIES: &[TemplateEntry] = &[
        TemplateEntry::new("settings.gradle", "\nrootProject.name = \"{{APP_NAME}}\"\n"),
        TemplateEntry::new(
            "app/src/main/java/{{PACKAGE_PATH}}/MainActivity.java",
            "package {{PACKAGE_NAME}};",
        ),
    ];

    #[test]
    fn render_tree_substitutes_paths_and_trims_content() {
        let config = sample_config();
        let ctx = RenderContext::from_config(&config);
        let tree = render_tree(ENTRIES, &ctx, Path::new("/out")).unwrap();

        let files: Vec<_> = tree.files().collect();
        assert_eq!(files.len(), 2);
        assert_eq!(
            files[0].content,
            "rootProject.name = \"Example Hospital\""
        );
        assert_eq!(
            files[1].path,
            PathBuf::from("app/src/main/java/test/hospital/app/MainActivity.java")
        );
    }

    #[test]
    fn render_tree_rejects_duplicate_rendered_paths() {
        const CLASHING: &[TemplateEntry] = &[
            TemplateEntry::new("same.txt", "a"),
            TemplateEntry::new("same.txt", "b"),
        ];

        let ctx = RenderContext::from_config(&sample_config());
        let err = render_tree(CLASHING, &ctx, Path::new("/out")).unwrap_err();
        assert!(matches!(err, DomainError::DuplicatePath { .. }));
    }

    #[test]
    fn render_tree_rejects_empty_registry() {
        let ctx = RenderContext::from_config(&sample_config());
        let err = render_tree(&[], &ctx, Path::new("/out")).unwrap_err();
        assert_eq!(err, DomainError::EmptyTree);
    }
}
