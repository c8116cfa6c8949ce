use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "product-card", version, about = "Show a product card in the terminal")]
pub struct Cli {
    /// Product file (TOML, or JSON when the extension is .json)
    #[arg(long, value_name = "PATH")]
    pub product: Option<PathBuf>,

    /// Log file (default: <cache dir>/product-card/product-card.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the card once as plain text and exit
    #[arg(long)]
    pub print: bool,
}
