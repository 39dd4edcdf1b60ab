use crate::registry::command::CommandEntry;

/// One level of a host application's command hierarchy.
///
/// A registry with no declared name is the root of the hierarchy. Nesting is
/// by ownership (each [`GroupEntry`] owns its registry), so the graph is a
/// tree by construction and cannot contain cycles.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    /// Declared application or group name, if any
    pub name: Option<String>,
    /// Leaf commands, in declaration order
    pub commands: Vec<CommandEntry>,
    /// Nested sub-applications, in declaration order
    pub groups: Vec<GroupEntry>,
}

/// A nested registry mounted under a parent.
///
/// An unnamed group does not introduce its own level: its registry's entries
/// are spliced directly into the parent when the tree is built.
#[derive(Debug, Clone, Default)]
pub struct GroupEntry {
    pub name: Option<String>,
    pub registry: CommandRegistry,
}

impl CommandRegistry {
    /// Returns a flattened list of all commands in this registry and its
    /// nested groups
    #[must_use]
    pub fn all_commands(&self) -> Vec<&CommandEntry> {
        self.commands
            .iter()
            .chain(
                self.groups
                    .iter()
                    .flat_map(|group| group.registry.all_commands()),
            )
            .collect()
    }
}
