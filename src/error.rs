//! Error types for credential argument parsing.

use std::fmt;
use std::io;

/// Errors that can occur when reading operation arguments from a stream.
///
/// No partial value is ever produced: either the whole input up to the
/// terminating blank line is accepted or one of these is returned.
#[derive(Debug)]
pub enum ArgumentsError {
    /// The underlying stream failed, or its content was not valid UTF-8
    Read(io::Error),
    /// A line did not follow the `key=value` format
    Format(FormatError),
}

impl fmt::Display for ArgumentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "failed to read operation arguments: {e}"),
            Self::Format(e) => write!(f, "malformed operation arguments: {e}"),
        }
    }
}

impl std::error::Error for ArgumentsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            Self::Format(e) => Some(e),
        }
    }
}

impl From<io::Error> for ArgumentsError {
    fn from(e: io::Error) -> Self {
        Self::Read(e)
    }
}

impl From<FormatError> for ArgumentsError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

/// Errors for lines that violate the wire format.
///
/// `Debug` and `Display` never include the offending line, which may carry
/// a secret.
#[derive(Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A non-blank line has no `=` separator
    MissingSeparator {
        /// 1-based line number in the input
        line_number: usize,
        /// The offending line, terminator stripped
        line: String,
    },
    /// A line exceeds the configured length limit
    LineTooLong {
        /// 1-based line number in the input
        line_number: usize,
        /// Maximum allowed length in bytes
        max: usize,
        /// Actual length in bytes
        actual: usize,
    },
    /// A key or value contains a carriage return or NUL
    ForbiddenChar {
        /// 1-based line number in the input
        line_number: usize,
        /// The forbidden character
        char: char,
    },
}

impl fmt::Debug for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { line_number, line } => f
                .debug_struct("MissingSeparator")
                .field("line_number", line_number)
                .field("line", &format_args!("<{} bytes redacted>", line.len()))
                .finish(),
            Self::LineTooLong {
                line_number,
                max,
                actual,
            } => f
                .debug_struct("LineTooLong")
                .field("line_number", line_number)
                .field("max", max)
                .field("actual", actual)
                .finish(),
            Self::ForbiddenChar { line_number, char } => f
                .debug_struct("ForbiddenChar")
                .field("line_number", line_number)
                .field("char", char)
                .finish(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The line may hold a secret, so only its length is reported.
            Self::MissingSeparator { line_number, line } => write!(
                f,
                "line {line_number} ({} bytes) has no '=' separator; expected key=value",
                line.len()
            ),
            Self::LineTooLong {
                line_number,
                max,
                actual,
            } => write!(
                f,
                "line {line_number} is {actual} bytes, exceeding the {max} byte limit"
            ),
            Self::ForbiddenChar { line_number, char } => write!(
                f,
                "line {line_number} contains forbidden character {char:?}"
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// Errors raised when a target URI cannot be synthesized from the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidUriError {
    /// The `protocol` field is absent or empty
    MissingProtocol,
    /// The `protocol` field is not a valid URI scheme
    InvalidScheme {
        /// The rejected scheme
        scheme: String,
    },
    /// The `host` field is absent or empty
    MissingHost,
    /// The `host` field cannot be used as a URI authority
    InvalidHost {
        /// The rejected host
        host: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// The numeric port suffix of `host` is out of range
    InvalidPort {
        /// The rejected port text
        value: String,
    },
}

impl fmt::Display for InvalidUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingProtocol => write!(f, "missing required field 'protocol'"),
            Self::InvalidScheme { scheme } => write!(
                f,
                "invalid scheme '{scheme}'; must start with a letter followed by letters, digits, '+', '-' or '.'"
            ),
            Self::MissingHost => write!(f, "missing required field 'host'"),
            Self::InvalidHost { host, reason } => write!(f, "invalid host '{host}': {reason}"),
            Self::InvalidPort { value } => {
                write!(f, "invalid port '{value}': port must be 0-65535")
            }
        }
    }
}

impl std::error::Error for InvalidUriError {}

/// Errors for keys and values rejected by the setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Key is empty
    EmptyKey,
    /// Key contains the `=` separator
    KeyContainsSeparator {
        /// The rejected key
        key: String,
    },
    /// Key or value contains a character that would break the line framing
    ForbiddenChar {
        /// Name of the field being set
        field: String,
        /// The forbidden character
        char: char,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "key cannot be empty"),
            Self::KeyContainsSeparator { key } => {
                write!(f, "key '{key}' cannot contain '='")
            }
            Self::ForbiddenChar { field, char } => write!(
                f,
                "'{field}' contains forbidden character {char:?}; line breaks and NUL are not allowed"
            ),
        }
    }
}

impl std::error::Error for ValueError {}
