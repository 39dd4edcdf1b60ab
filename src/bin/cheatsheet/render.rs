use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use clap_cheatsheet::render::{self, RenderOptions};
use clap_cheatsheet::{load_registry, tree};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the registry file (.yaml, .yml or .json)
    file: PathBuf,

    /// Include hidden commands
    #[arg(long)]
    show_all: bool,

    /// Print the bare tree without the panel frame
    #[arg(long)]
    no_panel: bool,
}

/// Resolve render options from the flag and the output terminal.
pub fn options(no_color: bool) -> RenderOptions {
    RenderOptions {
        color: !no_color && std::io::stdout().is_terminal(),
    }
}

/// Run the render subcommand.
///
/// # Errors
///
/// Returns an error if the registry file cannot be loaded or stdout fails.
pub fn run(
    args: &RenderArgs,
    options: &RenderOptions,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let registry = load_registry(&args.file)?;
    let tree = tree::build(&registry, args.show_all);

    let mut stdout = std::io::stdout().lock();
    if args.no_panel {
        render::write_tree(&mut stdout, &tree, options)?;
    } else {
        render::write_panel(&mut stdout, &tree, options)?;
    }
    Ok(ExitCode::SUCCESS)
}
