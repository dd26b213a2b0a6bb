use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_VCGENCMD: &str = "vcgencmd";

#[derive(Parser, Debug)]
#[command(name = "picheck", version, about = "Raspberry Pi firmware diagnostics CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_VCGENCMD,
        value_name = "PATH",
        help = "Firmware utility to invoke"
    )]
    pub vcgencmd: String,
    #[arg(
        long,
        global = true,
        help = "Invoke the firmware utility directly instead of through sudo"
    )]
    pub no_sudo: bool,
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "JSON file overriding the built-in check list"
    )]
    pub checks: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Run,
    List,
}
