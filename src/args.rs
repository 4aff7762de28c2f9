use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wares")]
#[command(about = "Item catalog service backed by a flat JSON file", long_about = None)]
pub struct Cli {
    /// Path of the backing JSON file
    #[arg(long, default_value = "data/items.json")]
    pub data: PathBuf,

    /// Host address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// TCP port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,
}
