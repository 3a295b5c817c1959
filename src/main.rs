mod app;
mod cli;
mod client;
mod config;
mod consts;
mod error;
mod output;
mod pricing;
mod rag;
mod tracks;

use clap::Parser;

use app::CommandContext;
use cli::{Cli, Commands};
use config::Config;
use output::NumberFormat;
use pricing::PricingCatalog;

fn main() {
    let cli = Cli::parse();

    // JSON consumers get clean streams; progress chatter goes away
    let quiet = cli.json;
    let config = if quiet {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    let number_format = match NumberFormat::from_locale(cli.locale.as_deref()) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let catalog = if quiet {
        PricingCatalog::load_quiet(cli.offline)
    } else {
        PricingCatalog::load(cli.offline)
    };

    let ctx = CommandContext {
        cli: &cli,
        catalog: &catalog,
        number_format,
    };

    let result = match &cli.command {
        Some(Commands::Rag { track, all, query }) => {
            app::run_rag(&ctx, *track, *all, query.as_deref())
        }
        Some(Commands::Tracks) => {
            app::run_tracks(&ctx);
            Ok(())
        }
        Some(Commands::Estimate {
            input,
            output,
            seconds,
        }) => {
            app::run_estimate(&ctx, *input, *output, *seconds);
            Ok(())
        }
        Some(Commands::Chat { prompt }) => app::run_chat(&ctx, prompt.as_deref()),
        None => app::run_chat(&ctx, None),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
