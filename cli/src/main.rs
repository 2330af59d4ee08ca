mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, check, targets};
use edgeprobe_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Targets => {
            let cfg = Config {
                quiet: commands.quiet,
                no_banner: commands.no_banner,
                ..Config::default()
            };
            print::header("built-in targets", cfg.quiet);
            targets::targets(&cfg);
            Ok(())
        }
        Commands::Check {
            targets: targets_file,
            timeout,
            strict,
            clear,
        } => {
            let cfg = Config {
                quiet: commands.quiet,
                no_banner: commands.no_banner,
                strict,
                timeout: Duration::from_secs(timeout),
            };

            // Screen clearing stays out of the engine; one shot, up front.
            if clear {
                let _ = console::Term::stdout().clear_screen();
            }

            print::banner(cfg.no_banner, cfg.quiet);
            print::header("checking edge connectivity", cfg.quiet);

            let all_clear = check::check(targets_file, &cfg).await?;
            if cfg.strict && !all_clear {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
