use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_RECON_ROOT: &str = "./Recon";
pub const DEFAULT_MEDIA_PREFIX: &str = "/recon_data";
pub const DEFAULT_PORT: u16 = 3001;

/// How the concatenated host stream (`webs/web_full_info.txt`) is split into objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HostStreamMode {
    /// Insert `,` between every `}{` pair and parse the result as one array.
    ///
    /// A single bad object discards the whole file.
    #[default]
    Repair,
    /// Walk the raw text with a streaming JSON deserializer.
    ///
    /// Objects before the first malformed one are kept.
    Stream,
}

impl FromStr for HostStreamMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "repair" => Ok(Self::Repair),
            "stream" => Ok(Self::Stream),
            other => Err(format!("unknown host stream mode: {other} (expected 'repair' or 'stream')")),
        }
    }
}

impl fmt::Display for HostStreamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repair => f.write_str("repair"),
            Self::Stream => f.write_str("stream"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one subdirectory per completed scan.
    pub recon_root: PathBuf,
    /// Address the HTTP API listens on.
    pub bind: SocketAddr,
    /// URL prefix under which the recon root is served as static files.
    ///
    /// Screenshot references are built on top of it.
    pub media_prefix: String,
    pub host_stream: HostStreamMode,
    /// 0 = everything, 1 = no headers, 2 = results only.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recon_root: PathBuf::from(DEFAULT_RECON_ROOT),
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            media_prefix: DEFAULT_MEDIA_PREFIX.to_string(),
            host_stream: HostStreamMode::default(),
            quiet: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_stream_mode_parses_case_insensitively() {
        assert_eq!("Repair".parse::<HostStreamMode>(), Ok(HostStreamMode::Repair));
        assert_eq!("STREAM".parse::<HostStreamMode>(), Ok(HostStreamMode::Stream));
        assert!("split".parse::<HostStreamMode>().is_err());
    }

    #[test]
    fn defaults_match_the_dashboard_frontend() {
        let cfg = Config::default();
        assert_eq!(cfg.bind.port(), 3001);
        assert_eq!(cfg.media_prefix, "/recon_data");
        assert_eq!(cfg.host_stream, HostStreamMode::Repair);
    }
}
