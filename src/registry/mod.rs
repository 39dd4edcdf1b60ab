//! Command registry model
//!
//! This module describes the surface of a host CLI application as a tree of
//! commands and groups. A registry holds ordered lists of leaf commands and
//! of nested sub-applications; groups may be named (one extra tree level) or
//! unnamed (their contents are inlined into the parent).
//!
//! The model is read-only input: nothing here executes or validates the
//! commands it describes. Display names and descriptions are resolved lazily
//! through the fallback chains on [`command::CommandEntry`].

pub mod command;
pub mod group;
