//! Constants for the credential helper wire protocol.

/// Key carrying the URI scheme (e.g. `https`).
pub const PROTOCOL_KEY: &str = "protocol";

/// Key carrying the remote host, optionally with a `:port` suffix.
pub const HOST_KEY: &str = "host";

/// Key carrying the repository path on the remote.
pub const PATH_KEY: &str = "path";

/// Key carrying the credential username.
pub const USERNAME_KEY: &str = "username";

/// Key carrying the credential password.
pub const PASSWORD_KEY: &str = "password";

/// Separator between a key and its value. Only the first occurrence splits.
pub const SEPARATOR: char = '=';

/// Line terminator emitted by the serializer on every platform.
pub const LINE_TERMINATOR: char = '\n';

/// Default maximum length of a single input line in bytes, terminator excluded.
pub const MAX_LINE_LENGTH: usize = 65535 - 1;

/// Characters that would break line framing inside a key or value.
pub(crate) const FORBIDDEN_CHARS: [char; 3] = ['\n', '\r', '\0'];
