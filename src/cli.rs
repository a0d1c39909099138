use clap::Parser;
use std::path::PathBuf;

/// Survey Server - serves a schema-driven survey form
#[derive(Parser, Debug, Clone)]
#[command(name = "survey", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "SURVEY_CONFIG", default_value = "survey.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "SURVEY_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "SURVEY_PORT")]
    pub port: Option<u16>,

    /// Form schema file (.json, .yaml, .yml or .toml)
    #[arg(short, long, env = "SURVEY_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Validate the configuration and schema, then exit
    #[arg(long)]
    pub check: bool,
}
