//! Typestate builder for constructing [`OperationArguments`] instances.
//!
//! This module provides a builder that uses phantom types to enforce
//! at compile-time that `protocol` and `host` are both set. Their values
//! are only checked for line framing here; whether they form a usable
//! target URI is decided by [`OperationArguments::target_uri`].

use std::marker::PhantomData;

use indexmap::IndexMap;

use crate::arguments::{validate_key, validate_value, OperationArguments};
use crate::error::ValueError;
use crate::fields::FieldKey;

/// Marker: No required fields set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: Protocol has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasProtocol;

/// Marker: Protocol and host are set, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ready;

/// A typestate builder for constructing [`OperationArguments`].
///
/// `protocol` must be set first, then `host`; `path`, credentials and
/// extension fields are optional and can be added in any state. The built
/// arguments list the recognized fields in the order
/// `protocol, host, path, username, password`, followed by the extension
/// fields in the order they were added.
///
/// # Examples
///
/// ```
/// use credential_args::ArgumentsBuilder;
///
/// let args = ArgumentsBuilder::new()
///     .protocol("https")
///     .host("github.com")
///     .path("org/repo.git")
///     .username("octocat")
///     .build()
///     .unwrap();
///
/// assert_eq!(args.to_string(), "protocol=https\nhost=github.com\npath=org/repo.git\nusername=octocat\n\n");
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use credential_args::ArgumentsBuilder;
///
/// // Error: cannot call host() before protocol()
/// let builder = ArgumentsBuilder::new().host("github.com");
/// ```
///
/// ```compile_fail
/// use credential_args::ArgumentsBuilder;
///
/// // Error: cannot call build() without a host
/// let args = ArgumentsBuilder::new().protocol("https").build();
/// ```
#[derive(Debug, Clone)]
pub struct ArgumentsBuilder<State = Empty> {
    protocol: Option<String>,
    host: Option<String>,
    path: Option<String>,
    username: Option<String>,
    password: Option<String>,
    extensions: Vec<(String, String)>,
    _state: PhantomData<State>,
}

impl ArgumentsBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            protocol: None,
            host: None,
            path: None,
            username: None,
            password: None,
            extensions: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Sets the protocol and advances to the [`HasProtocol`] state.
    #[must_use]
    pub fn protocol(self, protocol: impl Into<String>) -> ArgumentsBuilder<HasProtocol> {
        ArgumentsBuilder {
            protocol: Some(protocol.into()),
            host: self.host,
            path: self.path,
            username: self.username,
            password: self.password,
            extensions: self.extensions,
            _state: PhantomData,
        }
    }
}

impl Default for ArgumentsBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentsBuilder<HasProtocol> {
    /// Sets the host (optionally with `:port`) and advances to the [`Ready`] state.
    #[must_use]
    pub fn host(self, host: impl Into<String>) -> ArgumentsBuilder<Ready> {
        ArgumentsBuilder {
            protocol: self.protocol,
            host: Some(host.into()),
            path: self.path,
            username: self.username,
            password: self.password,
            extensions: self.extensions,
            _state: PhantomData,
        }
    }
}

impl<State> ArgumentsBuilder<State> {
    /// Sets the path.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Appends an extension field.
    ///
    /// An extension named like a recognized key replaces that key's value.
    #[must_use]
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extensions.push((key.into(), value.into()));
        self
    }
}

impl ArgumentsBuilder<Ready> {
    /// Builds the arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if an extension key is empty or contains `=`,
    /// or if any key or value contains a line break or NUL.
    pub fn build(self) -> Result<OperationArguments, ValueError> {
        let recognized = [
            (FieldKey::Protocol, self.protocol),
            (FieldKey::Host, self.host),
            (FieldKey::Path, self.path),
            (FieldKey::Username, self.username),
            (FieldKey::Password, self.password),
        ];

        let mut fields = IndexMap::new();
        for (key, value) in recognized {
            if let Some(value) = value {
                validate_value(key.as_str(), &value)?;
                fields.insert(key.as_str().to_string(), value);
            }
        }

        for (key, value) in self.extensions {
            validate_key(&key)?;
            validate_value(&key, &value)?;
            fields.insert(key, value);
        }

        Ok(OperationArguments::from_fields(fields))
    }
}
