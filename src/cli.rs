use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "yex",
    version,
    about = "Operational YAML helpers: dot-path extraction and document stream conversion"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Extract {
        #[arg(help = "Dot-separated key path, e.g. spec.template.image")]
        path: String,
        #[arg(help = "File holding a single YAML document")]
        file: PathBuf,
        #[arg(long, help = "Value printed instead when the path cannot be resolved")]
        default: Option<String>,
    },
    Json {
        #[arg(help = "YAML file to convert; stdin when omitted")]
        file: Option<PathBuf>,
    },
}
