use sampletrack::config::{Config, EnvSource};
use sampletrack::errors::AppError;
use std::fs;

#[test]
fn environment_overrides_defaults() {
    let mut cfg = Config::default();
    let env = EnvSource::from_pairs([
        ("SERVER", "/srv/data"),
        ("DATABASE", "mercury_test"),
        ("VIEWER_USER", "reader"),
        ("EDITOR_USER", "writer"),
        ("URL_PREFIX", "/pas/"),
        ("SESSION_TTL_MINUTES", "15"),
        ("PROJECT_ID", ""),
    ]);
    cfg.apply_env(&env).unwrap();

    assert_eq!(cfg.server, "/srv/data");
    assert_eq!(cfg.database, "mercury_test");
    assert_eq!(cfg.reference_database, "dcp");
    assert_eq!(cfg.viewer.user, "reader");
    assert_eq!(cfg.editor.user, "writer");
    assert_eq!(cfg.session_ttl_minutes, 15);
    // empty values do not override
    assert_eq!(cfg.project_id, "MERCURY_PASSIVE");
    assert_eq!(cfg.scope_prefix(), "/pas");
}

#[test]
fn bad_ttl_is_a_config_error() {
    let mut cfg = Config::default();
    let env = EnvSource::from_pairs([("SESSION_TTL_MINUTES", "soon")]);
    assert!(matches!(cfg.apply_env(&env), Err(AppError::Config(_))));
}

#[test]
fn every_missing_value_is_reported_at_once() {
    let cfg = Config::default();
    let missing = cfg.missing_fields();
    assert_eq!(
        missing,
        ["VIEWER_USER", "VIEWER_PASSWORD", "EDITOR_USER", "EDITOR_PASSWORD"]
    );

    let err = cfg.validate(".env").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing configuration values (.env): VIEWER_USER, VIEWER_PASSWORD, EDITOR_USER, EDITOR_PASSWORD"
    );
}

#[test]
fn redacted_copy_hides_passwords_only() {
    let mut cfg = Config::default();
    cfg.apply_env(&EnvSource::from_pairs([
        ("VIEWER_USER", "reader"),
        ("VIEWER_PASSWORD", "r-secret"),
    ]))
    .unwrap();

    let shown = cfg.redacted();
    assert_eq!(shown.viewer.user, "reader");
    assert_eq!(shown.viewer.password, "********");
    assert_eq!(shown.editor.password, "");
    assert_eq!(cfg.viewer.password, "r-secret");
}

#[test]
fn yaml_file_fills_only_given_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sampletrack.conf");
    fs::write(
        &path,
        "server: /data/pas\nviewer:\n  user: reader\n  password: pw\nlisten: 0.0.0.0:9000\n",
    )
    .unwrap();

    let cfg = Config::from_file(&path).unwrap();
    assert_eq!(cfg.server, "/data/pas");
    assert_eq!(cfg.viewer.user, "reader");
    assert_eq!(cfg.listen, "0.0.0.0:9000");
    assert_eq!(cfg.database, "mercury_passive");
    assert_eq!(cfg.session_ttl_minutes, 240);

    let missing = Config::from_file(&dir.path().join("absent.conf")).unwrap();
    assert_eq!(missing.listen, "127.0.0.1:8080");
}

#[test]
fn dotenv_file_follows_dotenv_rules() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(
        &path,
        "# credentials\n\nexport VIEWER_USER=reader\nEDITOR_PASSWORD=abc # prod\nVIEWER_PASSWORD=\"quoted value\"\nURL_PREFIX='/pas'\n",
    )
    .unwrap();

    let env = EnvSource::capture(&path).unwrap();
    assert_eq!(env.origin(), ".env file");
    assert_eq!(env.get("VIEWER_USER"), Some("reader"));
    assert_eq!(env.get("EDITOR_PASSWORD"), Some("abc"));
    assert_eq!(env.get("VIEWER_PASSWORD"), Some("quoted value"));
    assert_eq!(env.get("URL_PREFIX"), Some("/pas"));

    let mut cfg = Config::default();
    cfg.apply_env(&env).unwrap();
    assert_eq!(cfg.editor.password, "abc");
    assert_eq!(cfg.scope_prefix(), "/pas");
}

#[test]
fn malformed_dotenv_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "VIEWER_USER=reader\nnot a pair\n").unwrap();

    assert!(matches!(EnvSource::capture(&path), Err(AppError::Dotenv(_))));
}

#[test]
fn missing_dotenv_falls_back_to_the_process_environment() {
    let dir = tempfile::tempdir().unwrap();
    let env = EnvSource::capture(&dir.path().join(".env")).unwrap();
    assert_eq!(env.origin(), "OS environment");
}
