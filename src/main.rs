//! Language selection server.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────────┐
//!                 │                   SELECT-LANG                     │
//!                 │                                                   │
//!   Request       │  ┌────────┐   ┌──────────────┐   ┌────────────┐  │
//!   ──────────────┼─▶│  http  │──▶│  select_lang │──▶│  handlers  │  │
//!   Cookie: lang  │  │ server │   │  middleware  │   │ / and /{v} │  │
//!   Accept-Lang.  │  └────────┘   └──────┬───────┘   └─────┬──────┘  │
//!                 │                      │                 │         │
//!                 │                      ▼                 │         │
//!                 │              ┌──────────────┐          │         │
//!                 │              │  variables   │          │         │
//!                 │              │ (ArcSwap)    │          │         │
//!                 │              └──────┬───────┘          │         │
//!                 │                     ▼                  │         │
//!                 │              ┌──────────────┐          │         │
//!                 │              │ negotiation  │          │         │
//!                 │              │ scan + match │          │         │
//!                 │              └──────────────┘          │         │
//!   Response      │                                        │         │
//!   ◀─────────────┼────────────────────────────────────────┘         │
//!                 │                                                   │
//!                 │  config (toml, notify, SIGHUP) · observability    │
//!                 │  lifecycle (startup, signals, shutdown)           │
//!                 └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "select-lang")]
#[command(about = "Serve the preferred language for each request", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "select-lang.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    select_lang::lifecycle::startup::run(cli.config).await?;
    Ok(())
}
