//! Recognized keys of the credential helper protocol.

use std::fmt;

use crate::constants::{HOST_KEY, PASSWORD_KEY, PATH_KEY, PROTOCOL_KEY, USERNAME_KEY};

/// A key with dedicated accessors on [`OperationArguments`](crate::OperationArguments).
///
/// Keys are case-sensitive: `Host` is an extension field, not [`FieldKey::Host`].
///
/// # Examples
///
/// ```
/// use credential_args::FieldKey;
///
/// assert_eq!(FieldKey::from_key("host"), Some(FieldKey::Host));
/// assert_eq!(FieldKey::from_key("Host"), None);
/// assert_eq!(FieldKey::Password.as_str(), "password");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    /// `protocol`
    Protocol,
    /// `host`
    Host,
    /// `path`
    Path,
    /// `username`
    Username,
    /// `password`
    Password,
}

impl FieldKey {
    /// All recognized keys in canonical emission order.
    pub const ALL: [Self; 5] = [
        Self::Protocol,
        Self::Host,
        Self::Path,
        Self::Username,
        Self::Password,
    ];

    /// Returns the wire name of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protocol => PROTOCOL_KEY,
            Self::Host => HOST_KEY,
            Self::Path => PATH_KEY,
            Self::Username => USERNAME_KEY,
            Self::Password => PASSWORD_KEY,
        }
    }

    /// Looks up a recognized key by its wire name.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Returns true if the key carries a secret and must not be logged.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_roundtrips_through_its_name() {
        for key in FieldKey::ALL {
            assert_eq!(FieldKey::from_key(key.as_str()), Some(key));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(FieldKey::from_key("PROTOCOL").is_none());
        assert!(FieldKey::from_key("Username").is_none());
    }

    #[test]
    fn extension_keys_are_not_recognized() {
        assert!(FieldKey::from_key("wwwauth[]").is_none());
        assert!(FieldKey::from_key("").is_none());
    }

    #[test]
    fn only_password_is_secret() {
        let secrets: Vec<_> = FieldKey::ALL.into_iter().filter(|k| k.is_secret()).collect();
        assert_eq!(secrets, vec![FieldKey::Password]);
    }
}
