mod render;

use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cheatsheet",
    about = "Render a command tree cheatsheet for a CLI application"
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the cheatsheet for a registry described in a YAML or JSON file
    Render(render::RenderArgs),
    /// Show the command tree structure of the application
    Cheatsheet {
        /// Include hidden commands
        #[arg(long)]
        show_all: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let options = render::options(cli.no_color);

    match cli.command {
        Commands::Render(ref args) => render::run(args, &options),
        Commands::Cheatsheet { show_all } => {
            let mut stdout = std::io::stdout().lock();
            clap_cheatsheet::clap_app::run(&Cli::command(), show_all, &options, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
