//! Registry definitions loaded from YAML or JSON files
//!
//! Lets the standalone binary document a CLI that is described in a file
//! rather than built in-process. The file schema mirrors the registry model;
//! parsing is all-or-nothing, a malformed document never produces a partial
//! cheatsheet.

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::registry::command::CommandEntry;
use crate::registry::group::{CommandRegistry, GroupEntry};

/// Errors that can occur while loading a registry file
#[derive(Error, Debug)]
pub enum RegistryFileError {
    #[error("Registry file not found: {0}")]
    NotFound(PathBuf),
    #[error("Unable to read registry file {path}: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("Unable to parse YAML registry file {path}: {source}")]
    Yaml {
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("Unable to parse JSON registry file {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },
    #[error("Unsupported registry file extension: {0}")]
    UnknownFormat(PathBuf),
}

/// A single command as declared in a registry file
#[derive(Debug, Deserialize, Default)]
pub struct FileCommand {
    pub name: Option<String>,
    /// One-line help text
    pub help: Option<String>,
    /// Full help text, first non-empty line used when `help` is absent
    pub description: Option<String>,
    /// Underlying identifier (e.g. `add_user`), used to derive a display name
    pub id: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

/// A nested sub-application as declared in a registry file
#[derive(Debug, Deserialize, Default)]
pub struct FileGroup {
    pub name: Option<String>,
    #[serde(default)]
    pub registry: FileRegistry,
}

/// One registry level as declared in a registry file
#[derive(Debug, Deserialize, Default)]
pub struct FileRegistry {
    pub name: Option<String>,
    #[serde(default)]
    pub commands: Vec<FileCommand>,
    #[serde(default)]
    pub groups: Vec<FileGroup>,
}

impl From<FileCommand> for CommandEntry {
    fn from(file: FileCommand) -> Self {
        CommandEntry {
            name: file.name,
            short_help: file.help,
            long_help: file.description,
            callback_id: file.id,
            hidden: file.hidden,
        }
    }
}

impl From<FileGroup> for GroupEntry {
    fn from(file: FileGroup) -> Self {
        GroupEntry {
            name: file.name,
            registry: file.registry.into(),
        }
    }
}

impl From<FileRegistry> for CommandRegistry {
    fn from(file: FileRegistry) -> Self {
        CommandRegistry {
            name: file.name,
            commands: file.commands.into_iter().map(CommandEntry::from).collect(),
            groups: file.groups.into_iter().map(GroupEntry::from).collect(),
        }
    }
}

/// Load a registry from a YAML or JSON file, chosen by extension.
///
/// # Errors
///
/// Returns `RegistryFileError` if the file is missing, unreadable, has an
/// unsupported extension, or does not parse.
pub fn from_file(path: &Path) -> Result<CommandRegistry, RegistryFileError> {
    if !path.exists() {
        return Err(RegistryFileError::NotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path).map_err(|source| RegistryFileError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    let extension = path.extension().and_then(|ext| ext.to_str());
    let parsed: FileRegistry = match extension {
        Some("yaml" | "yml") => {
            serde_yaml::from_str(&contents).map_err(|source| RegistryFileError::Yaml {
                source,
                path: path.to_path_buf(),
            })?
        }
        Some("json") => {
            serde_json::from_str(&contents).map_err(|source| RegistryFileError::Json {
                source,
                path: path.to_path_buf(),
            })?
        }
        _ => return Err(RegistryFileError::UnknownFormat(path.to_path_buf())),
    };

    debug!("Loaded registry file: {}", path.display());
    Ok(parsed.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_YAML: &str = r"
name: demo
commands:
  - name: add-user
    help: Adds a new user.
  - id: generate_report
    description: |
      Generates a monthly report.

      Reads from the database.
  - name: debug-dump
    hidden: true
groups:
  - name: users
    registry:
      commands:
        - name: add
          help: Adds a new user.
        - name: delete
          help: Deletes an existing user.
";

    fn write_file(dir: &Path, file_name: &str, content: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "demo.yaml", DEMO_YAML);
        let registry = from_file(&path).unwrap();
        assert_eq!(registry.name.as_deref(), Some("demo"));
        assert_eq!(registry.commands.len(), 3);
        assert_eq!(registry.commands[0].display_name(), "add-user");
        assert_eq!(registry.commands[1].display_name(), "generate-report");
        assert_eq!(
            registry.commands[1].description(),
            "Generates a monthly report."
        );
        assert!(registry.commands[2].hidden);
        assert_eq!(registry.groups[0].name.as_deref(), Some("users"));
        assert_eq!(registry.groups[0].registry.commands.len(), 2);
    }

    #[test]
    fn test_load_json_matches_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"{
            "name": "demo",
            "commands": [{"name": "add-user", "help": "Adds a new user."}],
            "groups": [{"name": "users", "registry": {"commands": [{"name": "add"}]}}]
        }"#;
        let path = write_file(dir.path(), "demo.json", json);
        let registry = from_file(&path).unwrap();
        assert_eq!(registry.name.as_deref(), Some("demo"));
        assert_eq!(registry.commands[0].display_name(), "add-user");
        assert_eq!(registry.groups[0].registry.commands[0].display_name(), "add");
    }

    #[test]
    fn test_unnamed_group_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = r"
groups:
  - registry:
      commands:
        - name: inlined
";
        let path = write_file(dir.path(), "anon.yml", yaml);
        let registry = from_file(&path).unwrap();
        assert!(registry.groups[0].name.is_none());
        assert_eq!(
            registry.groups[0].registry.commands[0].display_name(),
            "inlined"
        );
    }

    #[test]
    fn test_missing_file() {
        let result = from_file(Path::new("/nonexistent/registry.yaml"));
        match result.unwrap_err() {
            RegistryFileError::NotFound(path) => {
                assert_eq!(path, Path::new("/nonexistent/registry.yaml"));
            }
            other => panic!("Expected NotFound, got: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "registry.toml", "name = 'demo'");
        match from_file(&path).unwrap_err() {
            RegistryFileError::UnknownFormat(p) => assert_eq!(p, path),
            other => panic!("Expected UnknownFormat, got: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_yaml_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "bad.yaml", "commands: {not: [a, list");
        match from_file(&path).unwrap_err() {
            RegistryFileError::Yaml { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected Yaml, got: {other:?}"),
        }
    }
}
