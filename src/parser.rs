//! Line reader for the `key=value` wire format.
//!
//! # Grammar
//!
//! ```abnf
//! input      = *field-line [ terminator ]
//! field-line = key "=" value line-end
//! key        = *( %x01-09 / %x0B-0C / %x0E-3C / %x3E-10FFFF )
//! value      = *( %x01-09 / %x0B-0C / %x0E-10FFFF )   ; may contain "="
//! line-end   = [ CR ] LF
//! terminator = [ CR ] LF                               ; an empty line
//! ```
//!
//! Reading stops at the first empty line or at end of stream, whichever
//! comes first. A final line without a line feed is still accepted. Keys and
//! values never contain CR or NUL, so every accepted block serializes back
//! to input that parses to the same fields.

use std::io::BufRead;

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::constants::{FORBIDDEN_CHARS, MAX_LINE_LENGTH, SEPARATOR};
use crate::error::{ArgumentsError, FormatError};

/// What to do with a non-blank line that has no `=` separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorPolicy {
    /// Fail the whole parse with [`FormatError::MissingSeparator`]
    #[default]
    Reject,
    /// Drop the line, log a warning, and keep reading
    Skip,
}

/// Parser settings.
///
/// The defaults follow the protocol strictly: malformed lines are rejected
/// and lines are limited to [`MAX_LINE_LENGTH`] bytes.
///
/// # Examples
///
/// ```
/// use credential_args::{OperationArguments, ParserConfig, SeparatorPolicy};
///
/// let config = ParserConfig::new().with_separator_policy(SeparatorPolicy::Skip);
/// let args = OperationArguments::from_reader_with(
///     "protocol=https\ngarbage\nhost=example.com\n\n".as_bytes(),
///     &config,
/// )
/// .unwrap();
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    separator_policy: SeparatorPolicy,
    max_line_length: usize,
}

impl ParserConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            separator_policy: SeparatorPolicy::Reject,
            max_line_length: MAX_LINE_LENGTH,
        }
    }

    /// Returns a configuration with the given separator policy.
    #[must_use]
    pub const fn with_separator_policy(mut self, policy: SeparatorPolicy) -> Self {
        self.separator_policy = policy;
        self
    }

    /// Returns a configuration with the given line length limit in bytes.
    #[must_use]
    pub const fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    /// Returns the separator policy.
    #[must_use]
    pub const fn separator_policy(&self) -> SeparatorPolicy {
        self.separator_policy
    }

    /// Returns the line length limit in bytes.
    #[must_use]
    pub const fn max_line_length(&self) -> usize {
        self.max_line_length
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads fields until the terminating blank line or end of stream.
///
/// A repeated key overwrites the earlier value but keeps its position.
pub(crate) fn parse_fields<R: BufRead>(
    mut reader: R,
    config: &ParserConfig,
) -> Result<IndexMap<String, String>, ArgumentsError> {
    let mut fields = IndexMap::new();
    let mut buf = String::new();
    let mut line_number = 0;
    let mut terminated = false;

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = strip_line_end(&buf);
        if line.is_empty() {
            terminated = true;
            break;
        }

        if line.len() > config.max_line_length {
            return Err(FormatError::LineTooLong {
                line_number,
                max: config.max_line_length,
                actual: line.len(),
            }
            .into());
        }

        if let Some(char) = line.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(FormatError::ForbiddenChar { line_number, char }.into());
        }

        if let Some((key, value)) = line.split_once(SEPARATOR) {
            trace!(key, line_number, "read field");
            fields.insert(key.to_owned(), value.to_owned());
        } else {
            match config.separator_policy {
                SeparatorPolicy::Reject => {
                    return Err(FormatError::MissingSeparator {
                        line_number,
                        line: line.to_owned(),
                    }
                    .into());
                }
                SeparatorPolicy::Skip => {
                    warn!(line_number, "skipping line without '=' separator");
                }
            }
        }
    }

    debug!(
        fields = fields.len(),
        lines = line_number,
        terminated,
        "parsed operation arguments"
    );
    Ok(fields)
}

/// Strips `\n` and, only when one was present, a preceding `\r`.
fn strip_line_end(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}
