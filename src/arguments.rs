//! Operation arguments exchanged with a credential helper.

use std::fmt;
use std::io::{self, BufReader, Read, Write};
use std::str::FromStr;

use indexmap::IndexMap;

use crate::constants::{
    FORBIDDEN_CHARS, HOST_KEY, LINE_TERMINATOR, PASSWORD_KEY, PATH_KEY, PROTOCOL_KEY, SEPARATOR,
    USERNAME_KEY,
};
use crate::error::{ArgumentsError, InvalidUriError, ValueError};
use crate::fields::FieldKey;
use crate::parser::{self, ParserConfig};
use crate::target_uri::TargetUri;

/// The `key=value` arguments of a single helper operation.
///
/// Fields keep the order in which they were first read. Recognized keys
/// (`protocol`, `host`, `path`, `username`, `password`) have dedicated
/// accessors; every other key is an extension field and is carried through
/// unchanged.
///
/// # Examples
///
/// ```
/// use credential_args::OperationArguments;
///
/// let input = "protocol=https\nhost=example.com\npath=org/repo\nusername=me\npassword=secret\n\n";
/// let args = OperationArguments::from_reader(input.as_bytes()).unwrap();
///
/// assert_eq!(args.protocol(), Some("https"));
/// assert_eq!(args.username(), Some("me"));
/// assert_eq!(args.target_uri().unwrap().to_string(), "https://example.com/org/repo");
/// assert_eq!(args.to_string(), input);
/// ```
#[derive(Clone, Default, Eq)]
pub struct OperationArguments {
    fields: IndexMap<String, String>,
}

impl OperationArguments {
    /// Creates an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads arguments from a stream with the default [`ParserConfig`].
    ///
    /// Reading stops at the first blank line or at end of stream.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentsError` if:
    /// - The stream fails or is not valid UTF-8
    /// - A non-blank line has no `=` separator
    /// - A line exceeds the length limit
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ArgumentsError> {
        Self::from_reader_with(reader, &ParserConfig::default())
    }

    /// Reads arguments from a stream with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentsError` under the same conditions as
    /// [`from_reader`](Self::from_reader), subject to `config`.
    pub fn from_reader_with<R: Read>(
        reader: R,
        config: &ParserConfig,
    ) -> Result<Self, ArgumentsError> {
        let fields = parser::parse_fields(BufReader::new(reader), config)?;
        Ok(Self { fields })
    }

    /// Parses arguments from a string.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentsError` if a line is malformed.
    pub fn parse(input: &str) -> Result<Self, ArgumentsError> {
        Self::from_reader(input.as_bytes())
    }

    pub(crate) fn from_fields(fields: IndexMap<String, String>) -> Self {
        Self { fields }
    }

    /// Returns the `protocol` field.
    #[must_use]
    pub fn protocol(&self) -> Option<&str> {
        self.get(PROTOCOL_KEY)
    }

    /// Returns the `host` field, including any `:port` suffix.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.get(HOST_KEY)
    }

    /// Returns the `path` field.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.get(PATH_KEY)
    }

    /// Returns the `username` field.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.get(USERNAME_KEY)
    }

    /// Returns the `password` field.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.get(PASSWORD_KEY)
    }

    /// Returns the value of a recognized field.
    #[must_use]
    pub fn field(&self, key: FieldKey) -> Option<&str> {
        self.get(key.as_str())
    }

    /// Returns the value for any key, recognized or not.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns true if no fields are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns an iterator over all fields in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns an iterator over the extension fields in wire order.
    pub fn extensions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(k, _)| FieldKey::from_key(k).is_none())
    }

    /// Synthesizes the lookup URI from the current field values.
    ///
    /// The URI is derived on every call, so it always reflects the latest
    /// setter calls. Credentials are never part of it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUriError` if `protocol` or `host` is missing or unusable.
    pub fn target_uri(&self) -> Result<TargetUri, InvalidUriError> {
        TargetUri::from_fields(self.protocol(), self.host(), self.path())
    }

    /// Composes a URI with the username and password embedded as user-info.
    ///
    /// Returns `Ok(None)` when there is no username.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUriError` if the target URI cannot be synthesized.
    pub fn credential_uri(&self) -> Result<Option<String>, InvalidUriError> {
        let target = self.target_uri()?;
        Ok(self
            .username()
            .map(|username| target.credential_uri(username, self.password())))
    }

    /// Sets the `username` field.
    ///
    /// # Errors
    ///
    /// Returns `ValueError` if the value contains a line break or NUL.
    pub fn set_username(&mut self, username: &str) -> Result<(), ValueError> {
        self.insert(USERNAME_KEY, username).map(|_| ())
    }

    /// Sets the `password` field.
    ///
    /// # Errors
    ///
    /// Returns `ValueError` if the value contains a line break or NUL.
    pub fn set_password(&mut self, password: &str) -> Result<(), ValueError> {
        self.insert(PASSWORD_KEY, password).map(|_| ())
    }

    /// Sets both credential fields.
    ///
    /// Both values are checked before either is written.
    ///
    /// # Errors
    ///
    /// Returns `ValueError` if either value contains a line break or NUL.
    pub fn set_credentials(&mut self, username: &str, password: &str) -> Result<(), ValueError> {
        validate_value(USERNAME_KEY, username)?;
        validate_value(PASSWORD_KEY, password)?;
        self.fields
            .insert(USERNAME_KEY.to_string(), username.to_string());
        self.fields
            .insert(PASSWORD_KEY.to_string(), password.to_string());
        Ok(())
    }

    /// Removes `username` and `password`, keeping the order of the rest.
    pub fn clear_credentials(&mut self) {
        self.fields.shift_remove(USERNAME_KEY);
        self.fields.shift_remove(PASSWORD_KEY);
    }

    /// Inserts or replaces a field.
    ///
    /// An existing key keeps its position; a new key is appended.
    /// Returns the previous value, if any.
    ///
    /// # Errors
    ///
    /// Returns `ValueError` if the key is empty or contains `=`, or if the
    /// key or value contains a line break or NUL.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<Option<String>, ValueError> {
        validate_key(key)?;
        validate_value(key, value)?;
        Ok(self.fields.insert(key.to_string(), value.to_string()))
    }

    /// Removes a field, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.fields.shift_remove(key)
    }

    /// Serializes the fields to the wire format.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Writes the fields in wire format, blank terminator line included.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }
}

pub(crate) fn validate_key(key: &str) -> Result<(), ValueError> {
    if key.is_empty() {
        return Err(ValueError::EmptyKey);
    }
    validate_wire_key(key)
}

/// Checks a key against the line framing only; an empty key is allowed,
/// as the parser accepts `=value`.
fn validate_wire_key(key: &str) -> Result<(), ValueError> {
    if key.contains(SEPARATOR) {
        return Err(ValueError::KeyContainsSeparator {
            key: key.to_string(),
        });
    }
    validate_value(key, key)
}

pub(crate) fn validate_value(field: &str, value: &str) -> Result<(), ValueError> {
    match value.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        Some(char) => Err(ValueError::ForbiddenChar {
            field: field.to_string(),
            char,
        }),
        None => Ok(()),
    }
}

impl fmt::Display for OperationArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.fields {
            write!(f, "{key}{SEPARATOR}{value}{LINE_TERMINATOR}")?;
        }
        write!(f, "{LINE_TERMINATOR}")
    }
}

impl fmt::Debug for OperationArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.fields {
            if FieldKey::from_key(key).is_some_and(FieldKey::is_secret) {
                map.entry(key, &"<redacted>");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

// Field order is part of the value.
impl PartialEq for OperationArguments {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len() && self.fields.iter().eq(other.fields.iter())
    }
}

impl FromStr for OperationArguments {
    type Err = ArgumentsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for OperationArguments {
    type Error = ArgumentsError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a OperationArguments {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OperationArguments {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.fields, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OperationArguments {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fields = <IndexMap<String, String> as serde::Deserialize>::deserialize(deserializer)?;
        for (key, value) in &fields {
            validate_wire_key(key).map_err(serde::de::Error::custom)?;
            validate_value(key, value).map_err(serde::de::Error::custom)?;
        }
        Ok(Self { fields })
    }
}
