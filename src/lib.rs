//! Parser and serializer for the credential helper `key=value` protocol.
//!
//! A version-control tool talks to its credential helper over stdin/stdout
//! with blocks of `key=value` lines terminated by a blank line. This crate
//! reads such a block into [`OperationArguments`], exposes the recognized
//! fields, derives a [`TargetUri`] for credential lookups, and writes the
//! block back out unchanged.
//!
//! # Overview
//!
//! ```text
//! protocol=https
//! host=example.com:8080
//! path=org/repo.git
//! username=me
//! password=secret
//! <blank line>
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use credential_args::OperationArguments;
//!
//! let input = "protocol=https\nhost=example.com:8080\npath=org/repo.git\nusername=me\n\n";
//! let mut args = OperationArguments::from_reader(input.as_bytes()).unwrap();
//!
//! assert_eq!(args.host(), Some("example.com:8080"));
//! let uri = args.target_uri().unwrap();
//! assert_eq!(uri.port(), Some(8080));
//! assert_eq!(uri.to_string(), "https://example.com:8080/org/repo.git");
//!
//! // The credential store answers by filling in the password
//! args.set_password("secret").unwrap();
//! assert_eq!(
//!     args.to_string(),
//!     "protocol=https\nhost=example.com:8080\npath=org/repo.git\nusername=me\npassword=secret\n\n"
//! );
//! ```
//!
//! # Builder Pattern
//!
//! ```rust
//! use credential_args::ArgumentsBuilder;
//!
//! let args = ArgumentsBuilder::new()
//!     .protocol("https")
//!     .host("github.com")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(args.to_string(), "protocol=https\nhost=github.com\n\n");
//! ```
//!
//! # Wire Format Rules
//!
//! | Rule | Behavior |
//! |------|----------|
//! | Separator | first `=` on the line; values may contain `=` |
//! | Terminator | first empty line, or end of stream |
//! | Line ending | `\n` written; `\r\n` accepted on input |
//! | CR or NUL in a key or value | rejected by the parser and the setters |
//! | Repeated key | last value wins, first position kept |
//! | Line without `=` | error by default, see [`SeparatorPolicy`] |
//! | Line length | 65534 bytes by default |
//!
//! # Logging
//!
//! Parsing emits [`tracing`] events under this crate's target. Field values
//! are never logged, and `Debug` output redacts the password.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod arguments;
mod builder;
mod constants;
mod error;
mod fields;
mod parser;
pub mod prelude;
mod target_uri;

pub use arguments::OperationArguments;
pub use builder::{ArgumentsBuilder, Empty, HasProtocol, Ready};
pub use constants::{
    HOST_KEY, LINE_TERMINATOR, MAX_LINE_LENGTH, PASSWORD_KEY, PATH_KEY, PROTOCOL_KEY, SEPARATOR,
    USERNAME_KEY,
};
pub use error::{ArgumentsError, FormatError, InvalidUriError, ValueError};
pub use fields::FieldKey;
pub use parser::{ParserConfig, SeparatorPolicy};
pub use target_uri::TargetUri;
