//! Bearer credentials and the process-wide default credential.
//!
//! Clients normally carry their own [`Credential`]. Script-style callers can
//! instead install a default once at start-up with [`set_credential`] and
//! build clients from it later.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::ConfigError;

static DEFAULT_CREDENTIAL: RwLock<Option<Credential>> = RwLock::new(None);

/// API key attached to every request as `Authorization: Bearer <key>`.
///
/// The secret is never printed by `Debug` or `Display`.
#[derive(Clone, Eq, PartialEq)]
pub struct Credential(Arc<str>);

impl Credential {
    /// Wraps an API key, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] when the key is blank.
    pub fn new(secret: impl AsRef<str>) -> Result<Self, ConfigError> {
        let trimmed = secret.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        Ok(Self(Arc::from(trimmed)))
    }

    /// Returns the raw secret.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Installs the process-wide default credential, replacing any previous one.
///
/// # Errors
///
/// Returns [`ConfigError::MissingCredential`] when the key is blank; the
/// previous default is left untouched in that case.
pub fn set_credential(secret: impl AsRef<str>) -> Result<(), ConfigError> {
    let credential = Credential::new(secret)?;
    let mut slot = DEFAULT_CREDENTIAL
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *slot = Some(credential);
    Ok(())
}

/// Returns the most recently installed default credential.
///
/// # Errors
///
/// Returns [`ConfigError::MissingCredential`] when none has been set.
pub fn credential() -> Result<Credential, ConfigError> {
    DEFAULT_CREDENTIAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(ConfigError::MissingCredential)
}

/// Removes the process-wide default credential.
pub fn clear_credential() {
    let mut slot = DEFAULT_CREDENTIAL
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *slot = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_are_rejected() {
        assert_eq!(Credential::new("   "), Err(ConfigError::MissingCredential));
    }

    #[test]
    fn debug_output_redacts_secret() {
        let credential = Credential::new("super-secret").expect("non-empty key");
        assert_eq!(format!("{credential:?}"), "Credential(***)");
        assert_eq!(credential.to_string(), "***");
        assert_eq!(credential.bearer(), "Bearer super-secret");
    }

    // The default slot is process-wide, so every assertion touching it lives
    // in this single test to avoid races between parallel tests.
    #[test]
    fn default_credential_lifecycle() {
        clear_credential();
        assert_eq!(credential(), Err(ConfigError::MissingCredential));

        set_credential("first").expect("valid key");
        assert_eq!(credential().expect("installed").expose(), "first");

        set_credential("second").expect("valid key");
        assert_eq!(credential().expect("installed").expose(), "second");

        assert!(set_credential(" ").is_err());
        assert_eq!(credential().expect("still installed").expose(), "second");

        let readers: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| credential().map(|c| c.expose().to_owned())))
            .collect();
        for reader in readers {
            let seen = reader.join().expect("reader thread");
            assert_eq!(seen.as_deref(), Ok("second"));
        }

        clear_credential();
        assert_eq!(credential(), Err(ConfigError::MissingCredential));
    }
}
