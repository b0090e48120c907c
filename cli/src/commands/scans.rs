use colored::*;
use reconview_common::config::Config;
use reconview_core::repository::fs::FsScanRepository;
use reconview_core::service::ReconService;

use crate::rprint;
use crate::terminal::{colors, print};

pub async fn scans(cfg: &Config) -> anyhow::Result<()> {
    let service = ReconService::new(Box::new(FsScanRepository::from_config(cfg)));
    let scans = service.list_scans().await?;

    print::header("available scans", cfg.quiet);
    if scans.is_empty() {
        print::no_results("scans");
        return Ok(());
    }

    for (idx, scan) in scans.iter().enumerate() {
        match cfg.quiet {
            2 => {
                rprint!(scan.as_str());
            }
            _ => print::tree_head(idx, scan.as_str()),
        }
    }

    if cfg.quiet == 0 {
        let count: ColoredString = scans.len().to_string().bold().green();
        let root: ColoredString = cfg.recon_root.display().to_string().color(colors::ACCENT);
        print::fat_separator();
        print::centerln(&format!("{count} scans in {root}"));
    }
    Ok(())
}
