//! clap integration
//!
//! Two halves: [`registry_from_command`] converts a built [`clap::Command`]
//! into the registry model, and [`command`] is the attachable `cheatsheet`
//! subcommand a host application mounts on itself. [`run`] wires the two
//! together with the tree builder and the panel renderer.
//!
//! ```no_run
//! let app = clap::Command::new("my-app")
//!     .subcommand(clap::Command::new("build").about("Build the project"))
//!     .subcommand(clap_cheatsheet::clap_app::command());
//! let matches = app.clone().get_matches();
//! if let Some(sub) = matches.subcommand_matches("cheatsheet") {
//!     let show_all = clap_cheatsheet::clap_app::show_all(sub);
//!     let options = clap_cheatsheet::render::RenderOptions::default();
//!     clap_cheatsheet::clap_app::run(&app, show_all, &options, &mut std::io::stdout()).unwrap();
//! }
//! ```

use std::io::{self, Write};

use clap::{Arg, ArgAction, ArgMatches};

use crate::registry::command::CommandEntry;
use crate::registry::group::{CommandRegistry, GroupEntry};
use crate::render::{self, RenderOptions};
use crate::tree;

/// Name of the attachable subcommand
pub const COMMAND_NAME: &str = "cheatsheet";

/// Convert a clap command into a [`CommandRegistry`].
///
/// Subcommands with their own subcommands become named groups; the rest
/// become leaf entries with clap's `about`/`long_about` as short and full
/// help. The auto-generated `help` subcommand is framework noise and is
/// skipped.
#[must_use]
pub fn registry_from_command(cmd: &clap::Command) -> CommandRegistry {
    let name = cmd.get_name();
    let mut registry = CommandRegistry {
        name: (!name.is_empty()).then(|| name.to_string()),
        ..Default::default()
    };

    for sub in cmd.get_subcommands() {
        if sub.get_name() == "help" {
            continue;
        }
        if sub.has_subcommands() {
            registry.groups.push(GroupEntry {
                name: Some(sub.get_name().to_string()),
                registry: registry_from_command(sub),
            });
        } else {
            registry.commands.push(CommandEntry {
                name: Some(sub.get_name().to_string()),
                short_help: sub.get_about().map(ToString::to_string),
                long_help: sub.get_long_about().map(ToString::to_string),
                callback_id: None,
                hidden: sub.is_hide_set(),
            });
        }
    }

    registry
}

/// The `cheatsheet` subcommand, ready to mount on a host application.
#[must_use]
pub fn command() -> clap::Command {
    clap::Command::new(COMMAND_NAME)
        .about("Show the command tree structure of the application.")
        .arg(
            Arg::new("show_all")
                .long("show-all")
                .help("Include hidden commands")
                .action(ArgAction::SetTrue),
        )
}

/// Read the `--show-all` flag from the `cheatsheet` subcommand's matches.
#[must_use]
pub fn show_all(matches: &ArgMatches) -> bool {
    matches.get_flag("show_all")
}

/// Render the cheatsheet panel for a host application.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn run(
    app: &clap::Command,
    show_all: bool,
    options: &RenderOptions,
    out: &mut impl Write,
) -> io::Result<()> {
    let registry = registry_from_command(app);
    let tree = tree::build(&registry, show_all);
    render::write_panel(out, &tree, options)
}
