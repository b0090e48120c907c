pub mod scans;
pub mod serve;
pub mod show;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reconview_common::config::{self, Config, HostStreamMode};

#[derive(Parser)]
#[command(name = "reconview")]
#[command(about = "Browse the output of a recon pipeline.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing one subdirectory per scan
    #[arg(long, global = true, env = "RECONVIEW_ROOT", default_value = config::DEFAULT_RECON_ROOT)]
    pub recon_root: PathBuf,

    /// How to split the concatenated host stream: 'repair' or 'stream'
    #[arg(long, global = true, env = "RECONVIEW_HOST_STREAM", default_value = "repair")]
    pub host_stream: HostStreamMode,

    /// Reduce terminal output (-q: no headers, -qq: results only)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve scan data over HTTP for the dashboard
    #[command(alias = "s")]
    Serve {
        /// Address to listen on
        #[arg(long, env = "RECONVIEW_BIND", default_value = "127.0.0.1:3001")]
        bind: SocketAddr,

        /// URL prefix the recon root is served under
        #[arg(long, default_value = config::DEFAULT_MEDIA_PREFIX)]
        media_prefix: String,
    },
    /// List available scans
    #[command(alias = "l")]
    Scans,
    /// Summarise a single scan
    #[command(alias = "v")]
    Show {
        scan: String,

        /// Print the full report as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let mut cfg = Config {
            recon_root: self.recon_root.clone(),
            host_stream: self.host_stream,
            quiet: self.quiet,
            ..Config::default()
        };
        if let Commands::Serve { bind, media_prefix } = &self.command {
            cfg.bind = *bind;
            cfg.media_prefix = media_prefix.clone();
        }
        cfg
    }
}
