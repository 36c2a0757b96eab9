use anyhow::Result;
use sentiscope::cli::{self, Commands};
use sentiscope::commands;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_runtime(cli.verbosity);

    let config = cli::load_cli_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Analyze(args)) => {
            let settings =
                cli::build_analyze_settings(&args, &config).map_err(anyhow::Error::msg)?;
            commands::handle_analyze(settings)
        }
        Some(Commands::Init { force }) => commands::init_config(force),
        Some(Commands::Tui { text }) => {
            commands::run_interactive(cli::build_tui_settings(&config), text.as_deref())
        }
        None => commands::run_interactive(cli::build_tui_settings(&config), None),
    }
}
