use crate::error::{Error, Result};

pub(crate) const DEFAULT_KEY_PREFIX: &str = "whatsapp-";

/// Maps caller session names to `session_id` values and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Namespace {
    prefix: String,
}

impl Namespace {
    pub(crate) fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub(crate) fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) fn session_id(&self, name: &str) -> Result<String> {
        // Names also form the archive file name `<name>.zip`.
        let invalid = name.is_empty()
            || name.contains("..")
            || name.contains(['/', '\\', '\0']);
        if invalid {
            return Err(Error::InvalidSessionName {
                name: name.to_string(),
            });
        }
        Ok(format!("{}{}", self.prefix, name))
    }

    /// Rows written under a different prefix are returned unchanged.
    pub(crate) fn session_name<'a>(&self, session_id: &'a str) -> &'a str {
        session_id.strip_prefix(&self.prefix).unwrap_or(session_id)
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_and_strips() {
        let ns = Namespace::default();
        let id = ns.session_id("alice").unwrap();
        assert_eq!(id, "whatsapp-alice");
        assert_eq!(ns.session_name(&id), "alice");
    }

    #[test]
    fn strips_only_the_leading_prefix() {
        let ns = Namespace::new("wa-");
        assert_eq!(ns.session_name("wa-wa-bob"), "wa-bob");
        assert_eq!(ns.session_name("other-bob"), "other-bob");
    }

    #[test]
    fn empty_prefix_is_identity() {
        let ns = Namespace::new("");
        assert_eq!(ns.session_id("x").unwrap(), "x");
        assert_eq!(ns.session_name("x"), "x");
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            Namespace::default().session_id(""),
            Err(Error::InvalidSessionName { .. })
        ));
    }

    #[test]
    fn rejects_names_that_leave_the_archive_dir() {
        let ns = Namespace::default();
        for name in ["../x", "..", "a/b", "a\\b", "/etc/passwd", "a..b", "nul\0"] {
            assert!(
                matches!(ns.session_id(name), Err(Error::InvalidSessionName { .. })),
                "{name:?} should be rejected"
            );
        }
        assert!(ns.session_id("team.support-1").is_ok());
    }
}
