use std::io::Write;
use std::net::TcpListener;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tempfile::{NamedTempFile, TempDir};
use tokio::time::{sleep, timeout};

/// Upstream base URL nothing listens on.
const UNREACHABLE_ARTSY: &str = "http://127.0.0.1:1/api";

/// Find an available port
fn get_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Base command with a clean environment for the binary.
fn server_command() -> tokio::process::Command {
    let mut command = tokio::process::Command::new(env!("CARGO_BIN_EXE_artscope"));
    command
        .env_remove("ARTSY_CLIENT_ID")
        .env_remove("ARTSY_CLIENT_SECRET")
        .env_remove("ARTSCOPE_CONFIG")
        .env("ARTSCOPE_ARTSY__BASE_URL", UNREACHABLE_ARTSY)
        .env("RUST_LOG", "error") // Quiet logs during tests
        .kill_on_drop(true);
    command
}

/// Spawn the server configured through environment variables only
async fn spawn_server(port: u16, static_dir: &Path) -> tokio::process::Child {
    server_command()
        .env("ARTSCOPE_SERVER__HOST", "127.0.0.1")
        .env("ARTSCOPE_SERVER__PORT", port.to_string())
        .env("ARTSCOPE_FRONTEND__STATIC_DIR", static_dir)
        .spawn()
        .expect("Failed to spawn server")
}

/// Wait for server to be ready
async fn wait_for_server(port: u16, max_attempts: u32) -> bool {
    let client = Client::new();
    for _ in 0..max_attempts {
        if client
            .get(format!("http://127.0.0.1:{}/health", port))
            .send()
            .await
            .is_ok()
        {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    false
}

fn static_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<html><body>Artist Search</body></html>",
    )
    .unwrap();
    dir
}

#[tokio::test]
async fn test_health_endpoint() {
    let port = get_available_port();
    let static_dir = static_dir();
    let mut server = spawn_server(port, static_dir.path()).await;

    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/health", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["status"], "ok");

    server.kill().await.ok();
}

#[tokio::test]
async fn test_config_endpoint_returns_sanitized() {
    let port = get_available_port();
    let static_dir = static_dir();
    let mut server = spawn_server(port, static_dir.path()).await;

    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/config", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["server"]["port"], port);
    assert_eq!(json["artsy"]["base_url"], UNREACHABLE_ARTSY);
    assert_eq!(json["artsy"]["client_id_configured"], false);

    server.kill().await.ok();
}

#[tokio::test]
async fn test_index_and_validation_without_credentials() {
    let port = get_available_port();
    let static_dir = static_dir();
    let mut server = spawn_server(port, static_dir.path()).await;

    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let base = format!("http://127.0.0.1:{}", port);

    let index = client.get(format!("{}/", base)).send().await.unwrap();
    assert!(index.status().is_success());
    assert!(index.text().await.unwrap().contains("Artist Search"));

    let response = client
        .get(format!("{}/search?q=", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["error"], "Empty query");

    // Token exchange cannot reach Artsy
    let response = client
        .get(format!("{}/search?q=warhol", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["error"], "Unable to retrieve Artsy token");

    server.kill().await.ok();
}

#[tokio::test]
async fn test_config_file_is_applied() {
    let port = get_available_port();
    let static_dir = static_dir();

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(
        temp_file,
        r#"
[server]
host = "127.0.0.1"
port = {}

[frontend]
static_dir = "{}"
"#,
        port,
        static_dir.path().display()
    )
    .unwrap();
    temp_file.flush().unwrap();

    let mut server = server_command()
        .env("ARTSCOPE_CONFIG", temp_file.path())
        .spawn()
        .expect("Failed to spawn server");

    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    server.kill().await.ok();
}

#[tokio::test]
async fn test_missing_config_file_exits_with_error() {
    let result = timeout(
        Duration::from_secs(5),
        server_command()
            .env("ARTSCOPE_CONFIG", "/nonexistent/config.toml")
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    assert!(!result.status.success());
}

#[tokio::test]
async fn test_invalid_base_url_exits_with_error() {
    let result = timeout(
        Duration::from_secs(5),
        server_command()
            .env("ARTSCOPE_ARTSY__BASE_URL", "ftp://example.com")
            .env("ARTSCOPE_SERVER__PORT", get_available_port().to_string())
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    assert!(!result.status.success());
}
