//! Tree construction from a command registry
//!
//! [`build`] walks a [`CommandRegistry`] depth-first and produces the
//! [`RenderNode`] tree consumed by the renderer. Traversal is pure and
//! allocation-only: it never touches a display surface and never mutates its
//! input, so it is safe to call repeatedly and from multiple threads.

use crate::registry::group::CommandRegistry;

/// The type and display data for a tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The application itself; label is the resolved application name
    Root { name: String },
    /// A leaf command with its resolved display name and description
    Command { name: String, description: String },
    /// A named group wrapping a nested registry
    Group { name: String },
}

/// One node of the output tree handed to the rendering collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode {
    pub kind: NodeKind,
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// The unstyled label text for this node.
    ///
    /// Commands render as `name: description`, or just the name when the
    /// description resolved to nothing.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.kind {
            NodeKind::Root { name } | NodeKind::Group { name } => name.clone(),
            NodeKind::Command { name, description } => {
                if description.is_empty() {
                    name.clone()
                } else {
                    format!("{name}: {description}")
                }
            }
        }
    }
}

/// Fallback label for a root registry with no declared name
const FALLBACK_APP_NAME: &str = "Application";

/// Build the render tree for a registry.
///
/// Hidden commands are skipped unless `show_all` is set. Within each registry
/// level, commands come first and groups after, each in declaration order.
/// Unnamed groups are inlined: their entries appear as direct children of the
/// surrounding node instead of under an extra level.
#[must_use]
pub fn build(registry: &CommandRegistry, show_all: bool) -> RenderNode {
    // An empty declared name counts as absent, same as no name at all
    let name = registry
        .name
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_APP_NAME.to_string());
    let mut root = RenderNode::new(NodeKind::Root { name });
    visit(registry, &mut root, show_all);
    root
}

/// Append a registry's visible entries to `node`, recursing into groups.
///
/// Nesting depth equals the depth of the host application's command
/// hierarchy, which is human-authored and shallow, so plain recursion is fine.
fn visit(registry: &CommandRegistry, node: &mut RenderNode, show_all: bool) {
    for entry in &registry.commands {
        if entry.hidden && !show_all {
            continue;
        }
        node.children.push(RenderNode::new(NodeKind::Command {
            name: entry.display_name(),
            description: entry.description(),
        }));
    }

    for group in &registry.groups {
        match group.name.as_deref() {
            Some(name) if !name.is_empty() => {
                let mut child = RenderNode::new(NodeKind::Group {
                    name: name.to_string(),
                });
                visit(&group.registry, &mut child, show_all);
                node.children.push(child);
            }
            // No resolvable name: splice the group's entries into the current node
            _ => visit(&group.registry, node, show_all),
        }
    }
}
