use crate::SecurityConfig;

#[test]
fn test_secret_key_required() {
    let config = SecurityConfig { secret_key: None };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("secret_key"));
}

#[test]
fn test_secret_key_too_short() {
    let config = SecurityConfig {
        secret_key: Some("short".to_string()),
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("at least 32 bytes"));
}

#[test]
fn test_secret_key_exactly_32_bytes() {
    let config = SecurityConfig {
        secret_key: Some("0123456789abcdef0123456789abcdef".to_string()),
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_secret_key_longer_than_32_bytes() {
    let config = SecurityConfig {
        secret_key: Some("0123456789abcdef0123456789abcdef-and-more".to_string()),
    };
    assert!(config.validate().is_ok());
}
