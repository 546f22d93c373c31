//! Server command implementation

use std::path::Path;

use anyhow::Result;

use super::load_engine;
use nexo_server::ServerConfig;

pub async fn cmd_serve(
    host: &str,
    port: u16,
    no_auth: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting Nexo API server...");
    println!("   Listening: http://{}:{}", host, port);
    if let Some(path) = config_path {
        println!("   Engine config: {}", path.display());
    }

    // Parse API keys from environment (comma-separated)
    let api_keys: Vec<String> = std::env::var("NEXO_API_KEYS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if no_auth {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
    } else if api_keys.is_empty() {
        println!("   🔒 Authentication: enabled, but NEXO_API_KEYS is empty");
        println!("      Set NEXO_API_KEYS=key1,key2 or use --no-auth for local dev");
    } else {
        println!("   🔒 Authentication: API keys ({} configured)", api_keys.len());
    }

    let engine = load_engine(config_path)?;
    let config = ServerConfig {
        require_auth: !no_auth,
        api_keys,
        ..Default::default()
    };

    nexo_server::serve(engine, config, host, port).await
}
