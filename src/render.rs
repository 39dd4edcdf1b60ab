//! Terminal output for a built render tree
//!
//! Turns a [`RenderNode`] tree into styled, guide-indented lines and
//! optionally frames them in a rounded panel. Styling goes through
//! [`anstyle`]; with `color` disabled the exact same text is emitted without
//! escape sequences, which is also what the tests assert against.

use std::io::{self, Write};

use anstyle::Style;

use crate::theme;
use crate::tree::{NodeKind, RenderNode};

/// Title drawn into the panel's top border
pub const PANEL_TITLE: &str = "Cheatsheet";

/// Output settings for the renderer
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit ANSI styling. Disable when writing to a pipe or a file.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// One styled fragment of an output line
type Span = (Style, String);

/// Write the tree as guide-indented lines, root first.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_tree(
    out: &mut impl Write,
    tree: &RenderNode,
    options: &RenderOptions,
) -> io::Result<()> {
    for line in flatten(tree) {
        write_spans(out, &line, options)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write the tree framed in a rounded panel titled [`PANEL_TITLE`].
///
/// The panel is fitted to the longest line, with one space of padding inside
/// the borders and the title left-aligned in the top border.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_panel(
    out: &mut impl Write,
    tree: &RenderNode,
    options: &RenderOptions,
) -> io::Result<()> {
    let lines = flatten(tree);
    // The top border spends title_width + 1 cells on "─ {title} " beyond the
    // corner, so the inner width can never be narrower than that
    let title_width = PANEL_TITLE.chars().count();
    let inner_width = lines
        .iter()
        .map(|line| line_width(line))
        .max()
        .unwrap_or(0)
        .max(title_width + 1);

    let top = format!(
        "╭─ {PANEL_TITLE} {}╮",
        "─".repeat(inner_width - title_width - 1)
    );
    write_span(out, &(theme::PANEL, top), options)?;
    writeln!(out)?;

    for line in &lines {
        write_span(out, &(theme::PANEL, "│ ".to_string()), options)?;
        write_spans(out, line, options)?;
        let padding = " ".repeat(inner_width - line_width(line));
        write_span(out, &(theme::PANEL, format!("{padding} │")), options)?;
        writeln!(out)?;
    }

    let bottom = format!("╰{}╯", "─".repeat(inner_width + 2));
    write_span(out, &(theme::PANEL, bottom), options)?;
    writeln!(out)
}

/// Flatten the tree into per-line span lists, depth-first.
fn flatten(tree: &RenderNode) -> Vec<Vec<Span>> {
    let mut lines = Vec::new();
    let mut ancestors = Vec::new();
    flatten_node(tree, 0, true, &mut ancestors, &mut lines);
    lines
}

fn flatten_node(
    node: &RenderNode,
    depth: usize,
    is_last: bool,
    ancestor_is_last: &mut Vec<bool>,
    lines: &mut Vec<Vec<Span>>,
) {
    let mut spans = Vec::new();

    // Indentation with vertical continuation lines
    for &level in ancestor_is_last.iter() {
        let connector = if level { "  " } else { "│ " };
        spans.push((theme::GUIDE, connector.to_string()));
    }

    // Tree guide for this node
    if depth > 0 {
        let guide = if is_last { "└─" } else { "├─" };
        spans.push((theme::GUIDE, guide.to_string()));
    }

    match &node.kind {
        NodeKind::Root { name } => spans.push((theme::ROOT, name.clone())),
        NodeKind::Group { name } => spans.push((theme::GROUP, name.clone())),
        NodeKind::Command { name, description } => {
            spans.push((theme::COMMAND, name.clone()));
            if !description.is_empty() {
                spans.push((Style::new(), format!(": {description}")));
            }
        }
    }

    lines.push(spans);

    // The root level never needs a continuation line, so its children start
    // at column zero instead of inheriting a two-char indent
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let child_is_last = i == count - 1;
        if depth > 0 {
            ancestor_is_last.push(is_last);
        }
        flatten_node(child, depth + 1, child_is_last, ancestor_is_last, lines);
        if depth > 0 {
            ancestor_is_last.pop();
        }
    }
}

/// Display width of a line, counting characters across all spans
fn line_width(line: &[Span]) -> usize {
    line.iter().map(|(_, text)| text.chars().count()).sum()
}

fn write_spans(out: &mut impl Write, spans: &[Span], options: &RenderOptions) -> io::Result<()> {
    for span in spans {
        write_span(out, span, options)?;
    }
    Ok(())
}

fn write_span(out: &mut impl Write, span: &Span, options: &RenderOptions) -> io::Result<()> {
    let (style, text) = span;
    if options.color {
        write!(out, "{}{text}{}", style.render(), style.render_reset())
    } else {
        write!(out, "{text}")
    }
}
