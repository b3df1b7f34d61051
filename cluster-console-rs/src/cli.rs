// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "cluster-console")]
#[command(about = "Drive the cluster display engine from text commands", long_about = None)]
pub struct Cli {
    /// Panel width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u16,

    /// Panel height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u16,

    /// Brightness to apply after init (0-100)
    #[arg(long)]
    pub brightness: Option<u8>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Draw the self-test cross before running commands
    #[arg(long = "self-test", default_value = "false")]
    pub self_test: bool,
}
