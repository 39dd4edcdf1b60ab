//! Core implementation of the clap-cheatsheet command tree renderer
//!
//! clap-cheatsheet documents a CLI application's own surface: given the tree
//! of commands and nested sub-applications the host framework has registered,
//! it renders a cheatsheet panel listing every available command, optionally
//! including hidden ones.
//!
//! The host surface can come from a live [`clap::Command`] (see
//! [`clap_app`]), or from a YAML/JSON registry file (see [`registry_file`]).
//! Either way the flow is the same: the registry is walked into a
//! [`tree::RenderNode`] tree by [`tree::build`], and the tree is drawn by
//! [`render`]. Building never executes or mutates anything it describes.

use std::path::Path;

use log::{debug, warn};

use crate::registry::group::CommandRegistry;
use crate::registry_file::RegistryFileError;

pub mod clap_app;
pub mod registry;
pub mod registry_file;
pub mod render;
pub mod theme;
pub mod tree;

/// Load a command registry from a YAML or JSON file.
///
/// Warns about named groups with nothing in them; they are valid (they render
/// as an empty labeled node) but usually a mistake in the file.
///
/// # Errors
///
/// Returns `RegistryFileError` if the file is missing, unreadable, has an
/// unsupported extension, or does not parse.
pub fn load_registry(path: &Path) -> Result<CommandRegistry, RegistryFileError> {
    debug!("Loading registry from file: {}", path.display());
    let registry = registry_file::from_file(path)?;
    warn_empty_groups(&registry);
    Ok(registry)
}

fn warn_empty_groups(registry: &CommandRegistry) {
    for group in &registry.groups {
        if let Some(name) = &group.name
            && group.registry.commands.is_empty()
            && group.registry.groups.is_empty()
        {
            warn!("Group '{name}' has no commands and no nested groups");
        }
        warn_empty_groups(&group.registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_registry_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.yaml");
        std::fs::write(
            &path,
            r"
name: app
commands:
  - name: run
    help: Runs the thing.
",
        )
        .unwrap();
        let registry = load_registry(&path).unwrap();
        let tree = tree::build(&registry, false);
        assert_eq!(tree.label(), "app");
        assert_eq!(tree.children[0].label(), "run: Runs the thing.");
    }
}
