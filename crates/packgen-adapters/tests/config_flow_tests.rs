//! End-to-end config flow over the in-memory filesystem: load, override,
//! write-back, and post-install application.

use std::path::Path;

use packgen_adapters::MemoryFilesystem;
use packgen_core::application::ports::{CommandRunner, Filesystem, FnResolver, VersionResolver};
use packgen_core::application::{ConfigService, PostInstallService};
use packgen_core::domain::{
    CONFIG_FILENAME, ConfigOverrides, ConfigSource, PackageManifest, ReleaseType, apply_overrides,
};
use packgen_core::error::PackgenResult;

struct NoopRunner;

impl CommandRunner for NoopRunner {
    fn run(&self, _command: &str, _cwd: &Path) -> PackgenResult<()> {
        Ok(())
    }
}

fn resolver(version: &'static str) -> Box<dyn VersionResolver> {
    Box::new(FnResolver(move |_: &str| Ok(version.to_string())))
}

#[test]
fn missing_config_falls_back_to_builtin_defaults() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/pkg")).unwrap();

    let loaded = ConfigService::new(Box::new(fs))
        .load(None, Path::new("/pkg"))
        .unwrap();

    assert_eq!(loaded.source, ConfigSource::Builtin);
    assert_eq!(loaded.config.modules, vec!["base", "hooks", "release"]);
    assert!(loaded.config.git.initial_release.enabled);
}

#[test]
fn local_config_overlays_builtin_defaults() {
    let fs = MemoryFilesystem::new();
    fs.seed_file(
        format!("/pkg/{CONFIG_FILENAME}"),
        r#"{
            "modules": ["base"],
            "postInstall": { "run": "npm run lint" },
            "git": { "initialRelease": { "enabled": false, "type": "minor" } }
        }"#,
    );

    let loaded = ConfigService::new(Box::new(fs))
        .load(None, Path::new("/pkg"))
        .unwrap();

    assert_eq!(loaded.source, ConfigSource::Local);
    assert_eq!(loaded.config.modules, vec!["base"]);
    assert_eq!(loaded.config.post_install.run, vec!["npm run lint"]);
    assert!(!loaded.config.git.initial_release.enabled);
    assert_eq!(
        loaded.config.git.initial_release.release_type,
        ReleaseType::Minor
    );
}

#[test]
fn explicit_config_path_wins_over_local_file() {
    let fs = MemoryFilesystem::new();
    fs.seed_file(format!("/pkg/{CONFIG_FILENAME}"), r#"{"modules": ["base"]}"#);
    fs.seed_file("/elsewhere/custom.json", r#"{"modules": ["release"]}"#);

    let loaded = ConfigService::new(Box::new(fs))
        .load(Some(Path::new("/elsewhere/custom.json")), Path::new("/pkg"))
        .unwrap();

    assert_eq!(loaded.source, ConfigSource::Explicit);
    assert_eq!(loaded.config.modules, vec!["release"]);
}

#[test]
fn explicit_config_path_missing_is_fatal() {
    let fs = MemoryFilesystem::new();
    let result =
        ConfigService::new(Box::new(fs)).load(Some(Path::new("/absent.json")), Path::new("/pkg"));
    assert!(result.is_err());
}

#[test]
fn builtin_config_is_written_back_but_user_config_is_not() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/pkg")).unwrap();
    let view = fs.clone();
    let service = ConfigService::new(Box::new(fs));

    let loaded = service.load(None, Path::new("/pkg")).unwrap();
    service.ensure_config_file(Path::new("/pkg"), &loaded).unwrap();

    let written = view
        .read_file(&Path::new("/pkg").join(CONFIG_FILENAME))
        .unwrap();
    assert!(written.ends_with('\n'));
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["modules"][0], "base");
    assert_eq!(parsed["git"]["initialRelease"]["type"], "patch");

    // Loading again now sees a user-owned file and must not rewrite it.
    view.seed_file(format!("/pkg/{CONFIG_FILENAME}"), r#"{"modules": ["base"]}"#);
    let reloaded = service.load(None, Path::new("/pkg")).unwrap();
    assert_eq!(reloaded.source, ConfigSource::Local);
    service
        .ensure_config_file(Path::new("/pkg"), &reloaded)
        .unwrap();
    assert_eq!(
        view.read_file(&Path::new("/pkg").join(CONFIG_FILENAME))
            .unwrap(),
        r#"{"modules": ["base"]}"#
    );
}

#[test]
fn overrides_then_post_install_flow() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/pkg")).unwrap();
    let mut loaded = ConfigService::new(Box::new(fs))
        .load(None, Path::new("/pkg"))
        .unwrap();

    let overrides = ConfigOverrides {
        dependencies: Some(vec!["left-pad".into()]),
        run_commands: Some(Vec::new()),
        git_release_enabled: Some(false),
        ..ConfigOverrides::default()
    };
    apply_overrides(&mut loaded.config, &overrides).unwrap();
    assert_eq!(loaded.config.post_install.dependencies, vec!["left-pad"]);
    assert!(loaded.config.post_install.run.is_empty());
    assert!(!loaded.config.git.initial_release.enabled);

    let mut manifest = PackageManifest::new("demo", "0.1.0", "a demo package");
    PostInstallService::new(resolver("9.9.9"), Box::new(NoopRunner))
        .apply(&mut manifest, &loaded.config)
        .unwrap();

    let out: serde_json::Value = serde_json::from_str(&manifest.to_json_pretty()).unwrap();
    assert_eq!(out["dependencies"]["left-pad"], "^9.9.9");
}
