use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

const VALID_JSON: &str = r#"{
    "gateway": {
        "apiUrl": "https://maap.example.com/bot/v1",
        "botId": "bot-123",
        "accessToken": "file-token"
    },
    "webhook": {"port": 8080}
}"#;

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, VALID_JSON).unwrap();

    let config = load_config_with(Some(&path), no_env).unwrap();
    assert_eq!(config.gateway.bot_id, "bot-123");
    assert_eq!(config.webhook.port, 8080);
    assert_eq!(config.webhook.path, "/");
}

#[test]
fn test_env_overrides_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, VALID_JSON).unwrap();

    let env: HashMap<&str, &str> = [("RCS_CHATBOT_ACCESS_TOKEN", "env-token")]
        .into_iter()
        .collect();
    let config =
        load_config_with(Some(&path), |name| env.get(name).map(|v| (*v).to_string())).unwrap();
    assert_eq!(config.gateway.access_token, "env-token");
}

#[test]
fn test_missing_file_uses_env_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let env: HashMap<&str, &str> = [
        ("RCS_CHATBOT_API_URL", "https://maap.example.com"),
        ("RCS_CHATBOT_BOT_ID", "bot"),
        ("RCS_CHATBOT_ACCESS_TOKEN", "tok"),
    ]
    .into_iter()
    .collect();
    let config =
        load_config_with(Some(&path), |name| env.get(name).map(|v| (*v).to_string())).unwrap();
    assert_eq!(config.gateway.api_url, "https://maap.example.com");
    assert_eq!(config.webhook.port, 5000);
}

#[test]
fn test_missing_file_without_env_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_config_with(Some(&path), no_env).unwrap_err();
    assert!(format!("{:#}", err).contains("gateway.apiUrl"));
}

#[test]
fn test_malformed_json_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{not json").unwrap();

    let err = load_config_with(Some(&path), no_env).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config JSON"));
}

#[test]
fn test_default_config_path() {
    assert_eq!(get_config_path(), PathBuf::from("rcs-chatbot.json"));
}
