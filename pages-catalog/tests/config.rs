use pages_catalog::config::{load_config, resolve_accounts, AccountKind, ConfigError};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn loads_fixture_with_defaults() {
    let config = load_config(&fixture("catalog.toml")).unwrap();

    assert_eq!(config.output, PathBuf::from("public/apps-data.json"));
    assert_eq!(config.accounts.len(), 2);
    assert_eq!(config.accounts[0].name, "DanielMeixner");
    assert_eq!(config.accounts[0].kind, AccountKind::Individual);
    assert_eq!(config.accounts[1].kind, AccountKind::Organization);
    assert_eq!(config.accounts[1].token_env, "CONTOSO_TOKEN");

    assert_eq!(config.screenshots.width, 1280);
    assert_eq!(config.screenshots.height, 800);
    assert_eq!(config.screenshots.settle_ms, 1000);
    assert_eq!(config.screenshots.timeout_secs, 30);
    assert_eq!(config.screenshots.browser, PathBuf::from("chromium"));

    assert_eq!(config.gallery.output, PathBuf::from("public/index.html"));
    assert_eq!(config.gallery.title, "Contoso Apps");
}

#[test]
fn resolves_tokens_from_environment() {
    let config = load_config(&fixture("catalog.toml")).unwrap();

    temp_env::with_vars(
        [("GITHUB_TOKEN", Some("ghp_personal")), ("CONTOSO_TOKEN", None)],
        || {
            let accounts = resolve_accounts(&config.accounts);

            assert_eq!(accounts.len(), 2);
            assert_eq!(accounts[0].token.as_deref(), Some("ghp_personal"));
            assert!(accounts[0].is_enabled());
            assert!(!accounts[1].is_enabled());
            assert!(!format!("{:?}", accounts[0]).contains("ghp_personal"));
        },
    );
}

#[test]
fn missing_file_is_reported() {
    let result = load_config(&fixture("does-not-exist.toml"));

    assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
}
