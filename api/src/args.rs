use std::path::PathBuf;

use clap::Parser;
use glowcheck_core::domain::common::{CatalogConfig, GlowcheckConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "glowcheck-api", about = "GlowCheck HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Address to bind the HTTP server on.
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Path prefix for every route, e.g. `/api/v1`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "http://localhost:5173")]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    /// JSON file overriding the built-in ingredient catalog.
    #[arg(long, env = "INGREDIENTS_FILE")]
    pub ingredients_file: Option<PathBuf>,

    /// JSON file overriding the built-in combination rules.
    #[arg(long, env = "COMBINATION_RULES_FILE")]
    pub combination_rules_file: Option<PathBuf>,

    /// JSON file overriding the built-in product catalog.
    #[arg(long, env = "PRODUCTS_FILE")]
    pub products_file: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    /// Emit logs as JSON lines.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for GlowcheckConfig {
    fn from(args: Args) -> Self {
        Self {
            catalog: CatalogConfig {
                ingredients_file: args.catalog.ingredients_file,
                combination_rules_file: args.catalog.combination_rules_file,
                products_file: args.catalog.products_file,
            },
        }
    }
}
