mod commands;
mod terminal;

use commands::{CommandLine, Commands, scans, serve, show};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    let cfg = commands.config();

    match commands.command {
        Commands::Serve { .. } => {
            print::banner(cfg.quiet);
            serve::serve(&cfg).await
        }
        Commands::Scans => {
            print::banner(cfg.quiet);
            scans::scans(&cfg).await
        }
        Commands::Show { scan, json } => {
            if !json {
                print::banner(cfg.quiet);
            }
            show::show(&scan, json, &cfg).await
        }
    }
}
