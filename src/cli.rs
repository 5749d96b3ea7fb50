use std::path::PathBuf;

use clap::Parser;

/// Store git identities and switch the active one through an interactive menu
#[derive(Parser, Debug)]
#[command(name = "usegit", version, about)]
pub struct Cli {
    /// Set user as global instead of for the current repository
    #[arg(long)]
    pub global: bool,

    /// Directory holding config.json, defaults to <config dir>/use-git
    #[arg(long, env = "USEGIT_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Log store and process activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
