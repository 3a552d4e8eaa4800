use super::*;
use serial_test::serial;

fn clear_db_env() {
    for name in ["DB_HOST", "DB_PORT", "DB_USER", "DB_PASSWORD", "DB_NAME"] {
        std::env::remove_var(name);
    }
}

#[tokio::test]
#[serial]
async fn test_missing_env_resolves_unavailable() {
    clear_db_env();
    let resolution = resolve().await;
    assert!(!resolution.is_available());
    let reason = resolution.reason().unwrap();
    assert!(reason.contains("DB_"), "reason should name the variable: {reason}");
}

#[tokio::test]
#[serial]
async fn test_invalid_port_resolves_unavailable() {
    clear_db_env();
    std::env::set_var("DB_HOST", "localhost");
    std::env::set_var("DB_PORT", "not-a-port");
    std::env::set_var("DB_USER", "u");
    std::env::set_var("DB_PASSWORD", "p");
    std::env::set_var("DB_NAME", "d");
    let resolution = resolve().await;
    assert!(!resolution.is_available());
    assert!(resolution.reason().unwrap().contains("DB_PORT"));
    clear_db_env();
}

#[test]
fn test_unavailable_exposes_its_reason() {
    let resolution = Resolution::Unavailable {
        reason: "down".into(),
    };
    assert!(!resolution.is_available());
    assert_eq!(resolution.reason(), Some("down"));
}
