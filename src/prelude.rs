//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use credential_args::prelude::*;
//!
//! let args = OperationArguments::parse("protocol=https\nhost=github.com\n\n").unwrap();
//! assert_eq!(args.field(FieldKey::Host), Some("github.com"));
//! ```
//!
//! Builder state markers (`Empty`, `HasProtocol`, `Ready`) are intentionally
//! excluded as they are implementation details.

pub use crate::{
    // Core types
    FieldKey, OperationArguments, TargetUri,
    // Builder
    ArgumentsBuilder,
    // Configuration
    ParserConfig, SeparatorPolicy,
    // Errors
    ArgumentsError, FormatError, InvalidUriError, ValueError,
    // Constants
    HOST_KEY, LINE_TERMINATOR, MAX_LINE_LENGTH, PASSWORD_KEY, PATH_KEY, PROTOCOL_KEY, SEPARATOR,
    USERNAME_KEY,
};
