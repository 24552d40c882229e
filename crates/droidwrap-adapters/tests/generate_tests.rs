//! End-to-end generation tests over a real temporary directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use droidwrap_adapters::{LocalFilesystem, MemoryFilesystem, registry};
use droidwrap_core::{
    application::{GenerationReport, ScaffoldService},
    domain::GenerationConfig,
};

fn service() -> ScaffoldService {
    ScaffoldService::new(Box::new(LocalFilesystem::new()))
}

fn hospital_config() -> GenerationConfig {
    GenerationConfig::builder()
        .app_name("Example Hospital")
        .package_name("test.hospital.app")
        .version_code(2)
        .version_name("1.1.0")
        .server_url("https://www.example-hospital.test/home")
        .build()
        .unwrap()
}

fn generate_at(root: &Path, config: &GenerationConfig) -> GenerationReport {
    service()
        .generate(config, registry::webview_app(), root)
        .unwrap()
}

/// Read every file under `root` into a sorted relative-path → content map.
fn snapshot(root: &Path) -> BTreeMap<String, String> {
    fn walk(dir: &Path, root: &Path, out: &mut BTreeMap<String, String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().display().to_string();
                out.insert(rel, fs::read_to_string(&path).unwrap());
            }
        }
    }

    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

#[test]
fn generates_the_complete_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("android-webview");

    let report = generate_at(&root, &hospital_config());

    assert_eq!(report.file_count(), 24);
    for file in &report.files {
        let on_disk = root.join(file);
        assert!(on_disk.is_file(), "missing {}", on_disk.display());
        assert!(on_disk.parent().unwrap().is_dir());
    }

    // Deeply nested buckets exist even though nothing pre-created them.
    for density in ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"] {
        assert!(
            root.join(format!("app/src/main/res/mipmap-{density}/ic_launcher.xml"))
                .is_file()
        );
        assert!(
            root.join(format!(
                "app/src/main/res/mipmap-{density}/ic_launcher_round.xml"
            ))
            .is_file()
        );
    }
}

#[test]
fn written_content_is_trimmed() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("out");

    generate_at(&root, &hospital_config());

    let gradle = fs::read_to_string(root.join("build.gradle")).unwrap();
    assert_eq!(gradle, gradle.trim());
    assert!(gradle.starts_with("buildscript"));
}

#[test]
fn generation_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("out");
    let config = hospital_config();

    generate_at(&root, &config);
    let first = snapshot(&root);

    generate_at(&root, &config);
    let second = snapshot(&root);

    assert_eq!(first, second);
}

#[test]
fn regeneration_fully_replaces_the_previous_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("out");

    generate_at(&root, &hospital_config());
    assert!(root.join("app/src/main/java/test/hospital/app").is_dir());

    // A stray file an operator dropped into the tree must also disappear.
    fs::write(root.join("leftover.txt"), "stale").unwrap();

    let other = GenerationConfig::builder()
        .app_name("Other Clinic")
        .package_name("test.clinic.other")
        .server_url("https://clinic.other.test/start")
        .build()
        .unwrap();
    generate_at(&root, &other);

    assert!(!root.join("leftover.txt").exists());
    assert!(!root.join("app/src/main/java/test/hospital/app").exists());

    for (path, content) in snapshot(&root) {
        assert!(
            !content.contains("example-hospital"),
            "stale domain in {path}"
        );
        assert!(
            !content.contains("test.hospital.app"),
            "stale package in {path}"
        );
    }
}

#[test]
fn root_occupied_by_a_plain_file_is_replaced() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("out");
    fs::write(&root, "i am a file").unwrap();

    generate_at(&root, &hospital_config());
    assert!(root.is_dir());
    assert!(root.join("settings.gradle").is_file());
}

#[cfg(unix)]
#[test]
fn blocked_deletion_aborts_without_writing() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let holder = temp.path().join("holder");
    fs::create_dir(&holder).unwrap();
    let root = holder.join("out");
    let probe = holder.join("probe");
    fs::write(&root, "immovable").unwrap();
    fs::write(&probe, "probe").unwrap();

    // Read-only parent: the file at `root` cannot be unlinked.
    fs::set_permissions(&holder, fs::Permissions::from_mode(0o555)).unwrap();

    // Permission bits don't bind for root; nothing to observe in that case.
    if fs::remove_file(&probe).is_ok() {
        fs::set_permissions(&holder, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = service().generate(&hospital_config(), registry::webview_app(), &root);

    // Restore before asserting so TempDir cleanup works even on failure.
    fs::set_permissions(&holder, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&root).unwrap(), "immovable");
}

// MemoryFilesystem rejects writes whose parent directory is missing, so a
// passing run proves every directory is created before any file lands.
#[test]
fn directories_are_created_before_files() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    service
        .generate(&hospital_config(), registry::webview_app(), Path::new("out"))
        .unwrap();

    assert_eq!(fs.list_files().len(), 24);
    assert!(
        fs.read_file(Path::new("out/app/src/main/AndroidManifest.xml"))
            .is_some()
    );
}

#[test]
fn report_carries_the_target_url() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("out");

    let report = generate_at(&root, &hospital_config());
    assert_eq!(report.server_url, "https://www.example-hospital.test/home");
    assert_eq!(report.root, root);
}
