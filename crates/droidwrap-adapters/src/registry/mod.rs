//! Built-in template registry.
//!
//! The registry is a declarative manifest: one [`TemplateEntry`] per output
//! file, in write order. Adding or removing an output file is a data change
//! here, not a control-flow change anywhere else.
//!
//! Paths are relative to the generation root and may carry substitution
//! variables (the Java source tree uses `{{PACKAGE_PATH}}`). Payload text
//! lives in [`payloads`].

use droidwrap_core::domain::TemplateEntry;

pub mod payloads;

/// The complete Android WebView wrapper application.
///
/// Top-level Gradle files first, then the application module, its manifest,
/// the activity source, resources, the icon set for all five density
/// buckets, and the build-instructions document.
pub const WEBVIEW_APP: &[TemplateEntry] = &[
    TemplateEntry::new("build.gradle", payloads::ROOT_BUILD_GRADLE),
    TemplateEntry::new("settings.gradle", payloads::SETTINGS_GRADLE),
    TemplateEntry::new("gradle.properties", payloads::GRADLE_PROPERTIES),
    TemplateEntry::new("app/build.gradle", payloads::APP_BUILD_GRADLE),
    TemplateEntry::new("app/src/main/AndroidManifest.xml", payloads::ANDROID_MANIFEST),
    TemplateEntry::new(
        "app/src/main/java/{{PACKAGE_PATH}}/MainActivity.java",
        payloads::MAIN_ACTIVITY,
    ),
    TemplateEntry::new(
        "app/src/main/res/layout/activity_main.xml",
        payloads::ACTIVITY_MAIN_LAYOUT,
    ),
    TemplateEntry::new("app/src/main/res/values/strings.xml", payloads::STRINGS_XML),
    TemplateEntry::new("app/src/main/res/values/colors.xml", payloads::COLORS_XML),
    TemplateEntry::new("app/src/main/res/values/themes.xml", payloads::THEMES_XML),
    TemplateEntry::new(
        "app/src/main/res/xml/data_extraction_rules.xml",
        payloads::DATA_EXTRACTION_RULES,
    ),
    TemplateEntry::new("app/src/main/res/xml/backup_rules.xml", payloads::BACKUP_RULES),
    TemplateEntry::new(
        "app/src/main/res/drawable/ic_launcher_foreground.xml",
        payloads::LAUNCHER_FOREGROUND,
    ),
    TemplateEntry::new(
        "app/src/main/res/mipmap-mdpi/ic_launcher.xml",
        payloads::ADAPTIVE_ICON,
    ),
    TemplateEntry::new(
        "app/src/main/res/mipmap-mdpi/ic_launcher_round.xml",
        payloads::ADAPTIVE_ICON,
    ),
    TemplateEntry::new(
        "app/src/main/res/mipmap-hdpi/ic_launcher.xml",
        payloads::ADAPTIVE_ICON,
    ),
    TemplateEntry::new(
        "app/src/main/res/mipmap-hdpi/ic_launcher_round.xml",
        payloads::ADAPTIVE_ICON,
    ),
    TemplateEntry::new(
        "app/src/main/res/mipmap-xhdpi/ic_launcher.xml",
        payloads::ADAPTIVE_ICON,
    ),
    TemplateEntry::new(
        "app/src/main/res/mipmap-xhdpi/ic_launcher_round.xml",
        payloads::ADAPTIVE_ICON,
    ),
    TemplateEntry::new(
        "app/src/main/res/mipmap-xxhdpi/ic_launcher.xml",
        payloads::ADAPTIVE_ICON,
    ),
    TemplateEntry::new(
        "app/src/main/res/mipmap-xxhdpi/ic_launcher_round.xml",
        payloads::ADAPTIVE_ICON,
    ),
    TemplateEntry::new(
        "app/src/main/res/mipmap-xxxhdpi/ic_launcher.xml",
        payloads::ADAPTIVE_ICON,
    ),
    TemplateEntry::new(
        "app/src/main/res/mipmap-xxxhdpi/ic_launcher_round.xml",
        payloads::ADAPTIVE_ICON,
    ),
    TemplateEntry::new("BUILD_INSTRUCTIONS.md", payloads::BUILD_INSTRUCTIONS),
];

/// The built-in registry as a slice, for callers that take `&[TemplateEntry]`.
pub fn webview_app() -> &'static [TemplateEntry] {
    WEBVIEW_APP
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::Path;

    use droidwrap_core::domain::{GenerationConfig, RenderContext, render_tree};

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

    fn rendered() -> Vec<(String, String)> {
        let config = sample_config();
        let ctx = RenderContext::from_config(&config);
        render_tree(WEBVIEW_APP, &ctx, Path::new("out"))
            .unwrap()
            .files()
            .map(|f| (f.path.display().to_string(), f.content.clone()))
            .collect()
    }

    fn content_of(files: &[(String, String)], path: &str) -> String {
        files
            .iter()
            .find(|(p, _)| p == path)
            .unwrap_or_else(|| panic!("missing file: {path}"))
            .1
            .clone()
    }

    #[test]
    fn registry_has_all_output_files() {
        assert_eq!(WEBVIEW_APP.len(), 24);
    }

    #[test]
    fn registry_paths_are_unique() {
        let paths: HashSet<_> = WEBVIEW_APP.iter().map(|e| e.path).collect();
        assert_eq!(paths.len(), WEBVIEW_APP.len());
    }

    #[test]
    fn every_density_bucket_has_both_icons() {
        for density in ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"] {
            for icon in ["ic_launcher.xml", "ic_launcher_round.xml"] {
                let path = format!("app/src/main/res/mipmap-{density}/{icon}");
                assert!(
                    WEBVIEW_APP.iter().any(|e| e.path == path),
                    "missing {path}"
                );
            }
        }
    }

    #[test]
    fn rendering_leaves_no_placeholders() {
        for (path, content) in rendered() {
            assert!(!path.contains("{{"), "unresolved placeholder in path {path}");
            assert!(
                !content.contains("{{"),
                "unresolved placeholder in {path}"
            );
        }
    }

    #[test]
    fn activity_lands_under_the_package_path() {
        let files = rendered();
        assert!(files.iter().any(|(p, _)| {
            p == "app/src/main/java/test/hospital/app/MainActivity.java"
        }));
    }

    #[test]
    fn manifest_contains_server_url_exactly_once() {
        let manifest = content_of(&rendered(), "app/src/main/AndroidManifest.xml");
        assert_eq!(
            manifest
                .matches("https://www.example-hospital.test/home")
                .count(),
            1
        );
    }

    #[test]
    fn activity_contains_server_url_exactly_once() {
        let activity = content_of(
            &rendered(),
            "app/src/main/java/test/hospital/app/MainActivity.java",
        );
        assert_eq!(
            activity
                .matches("https://www.example-hospital.test/home")
                .count(),
            1
        );
        assert!(activity.contains("package test.hospital.app;"));
    }

    #[test]
    fn strings_resource_verifies_the_bare_domain() {
        let strings = content_of(&rendered(), "app/src/main/res/values/strings.xml");
        assert!(strings.contains("asset_statements"));
        assert!(strings.contains("\"site\": \"https://www.example-hospital.test\""));
        assert!(strings.contains("<string name=\"app_name\">Example Hospital</string>"));
    }

    #[test]
    fn module_build_script_substitutes_versions_and_sdks() {
        let gradle = content_of(&rendered(), "app/build.gradle");
        assert!(gradle.contains("applicationId \"test.hospital.app\""));
        assert!(gradle.contains("minSdk 24"));
        assert!(gradle.contains("targetSdk 34"));
        assert!(gradle.contains("compileSdk 34"));
        assert!(gradle.contains("versionCode 2"));
        assert!(gradle.contains("versionName \"1.1.0\""));
    }

    #[test]
    fn themes_use_the_sanitized_app_name() {
        let themes = content_of(&rendered(), "app/src/main/res/values/themes.xml");
        assert!(themes.contains("Theme.ExampleHospital"));
        assert!(themes.contains("Theme.ExampleHospital.NoActionBar"));
        assert!(!themes.contains("Theme.Example Hospital"));
    }
}
