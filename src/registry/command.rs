/// A single leaf command as declared by the host application
#[derive(Debug, Clone, Default)]
pub struct CommandEntry {
    /// Explicitly declared display name, if any
    pub name: Option<String>,
    /// One-line help text
    pub short_help: Option<String>,
    /// Full help text; only the first non-empty line is used as a fallback
    pub long_help: Option<String>,
    /// Identifier of the underlying callback (e.g. a function name like
    /// `add_user`), used to derive a display name when none is declared
    pub callback_id: Option<String>,
    /// Hidden commands are excluded from the tree unless "show all" is requested
    pub hidden: bool,
}

impl CommandEntry {
    /// Resolve the display name: declared name, else the callback identifier
    /// with `_` replaced by `-`, else the literal `unnamed`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.callback_id.as_ref().map(|id| id.replace('_', "-")))
            .unwrap_or_else(|| String::from("unnamed"))
    }

    /// Resolve the description: short help, else the first non-empty line of
    /// the full help, else the empty string.
    #[must_use]
    pub fn description(&self) -> String {
        if let Some(short) = &self.short_help {
            return short.clone();
        }
        self.long_help
            .as_deref()
            .and_then(|help| help.lines().map(str::trim).find(|line| !line.is_empty()))
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_name_wins_over_callback_id() {
        let entry = CommandEntry {
            name: Some("add-user".to_string()),
            callback_id: Some("create_user".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.display_name(), "add-user");
    }

    #[test]
    fn test_name_derived_from_callback_id() {
        let entry = CommandEntry {
            callback_id: Some("add_user".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.display_name(), "add-user");
    }

    #[test]
    fn test_nameless_entry_falls_back_to_unnamed() {
        let entry = CommandEntry::default();
        assert_eq!(entry.display_name(), "unnamed");
    }

    #[test]
    fn test_short_help_wins_over_long_help() {
        let entry = CommandEntry {
            short_help: Some("Adds a user.".to_string()),
            long_help: Some("Creates a new user account.\n\nDetails.".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.description(), "Adds a user.");
    }

    #[test]
    fn test_description_uses_first_non_empty_line_of_long_help() {
        let entry = CommandEntry {
            long_help: Some("\n  Creates a new user account.  \n\nDetails.".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.description(), "Creates a new user account.");
    }

    #[test]
    fn test_description_empty_without_any_help() {
        let entry = CommandEntry::default();
        assert_eq!(entry.description(), "");
    }
}
