//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use select_lang::config::{parse_config, AppConfig};
use select_lang::{HttpServer, Shutdown};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub updates: mpsc::UnboundedSender<AppConfig>,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Parse a TOML config, panicking on errors.
pub fn config(toml: &str) -> AppConfig {
    parse_config(toml).expect("test config must be valid")
}

/// Start a server for `config` bound to 127.0.0.1 on a free port.
pub async fn start_server(config: AppConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let (updates, config_updates) = mpsc::unbounded_channel();
    let server = HttpServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move { server.run(listener, config_updates, server_shutdown).await });

    TestServer {
        addr,
        updates,
        shutdown,
        handle,
    }
}

/// A client that never pools or proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// Write `content` to a unique file in the temp dir.
pub fn write_temp_config(content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("select-lang-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(&path, content).unwrap();
    path
}
