mod commands;
mod terminal;

use commands::{CommandLine, sweep};
use sweepr_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        disable_input: commands.no_input,
    };

    print::banner(&cfg);
    print::header("getting ready for the sweep", cfg.quiet);
    sweep::sweep(commands.sweep, commands.interactive, &cfg).await
}
