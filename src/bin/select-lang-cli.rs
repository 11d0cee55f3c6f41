use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::json;

use select_lang::config::load_config;
use select_lang::{HeaderScanner, LanguageVariables};

#[derive(Parser)]
#[command(name = "select-lang-cli")]
#[command(about = "Inspect and exercise select-lang configurations offline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a config file and print its compiled variables
    Check {
        #[arg(short, long, default_value = "select-lang.toml")]
        config: PathBuf,
    },
    /// Resolve a language the way the server would
    Resolve {
        #[arg(short, long, default_value = "select-lang.toml")]
        config: PathBuf,
        /// Variable to resolve; defaults to the first one defined
        #[arg(short, long)]
        variable: Option<String>,
        /// Value of the `lang` cookie
        #[arg(long)]
        cookie: Option<String>,
        /// Raw Accept-Language header
        #[arg(long)]
        header: Option<String>,
    },
    /// Print the tokens scanned from an Accept-Language header
    Scan {
        #[arg(long)]
        header: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config } => {
            let variables = compile(&config)?;
            let report: Vec<_> = variables
                .iter()
                .map(|v| {
                    json!({
                        "variable": v.name(),
                        "default": v.groups().default_group().canonical(),
                        "groups": v.groups().groups().iter().map(|g| g.aliases()).collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Resolve {
            config,
            variable,
            cookie,
            header,
        } => {
            let variables = compile(&config)?;
            let selected = match variable.as_deref() {
                Some(name) => variables.get(name),
                None => variables.iter().next(),
            }
            .ok_or("unknown variable")?;

            let selection = selected.groups().select(
                cookie.as_deref().map(str::as_bytes),
                header.as_deref().map(str::as_bytes),
            );
            println!("{} ({})", selection.alias, selection.source);
        }
        Commands::Scan { header } => {
            for token in HeaderScanner::new(header.as_bytes()) {
                println!("{:?}", String::from_utf8_lossy(token));
            }
        }
    }

    Ok(())
}

fn compile(path: &Path) -> Result<LanguageVariables, Box<dyn std::error::Error>> {
    let config = load_config(path)?;
    LanguageVariables::from_config(&config.select_lang).map_err(|errors| {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
            .into()
    })
}
