//! Types produced by command extraction and consumed by the eval layer.

/// An `<interpreter> -c "<payload>"` invocation found in a command.
///
/// Both fields borrow from the original command text, so `payload` keeps
/// the caller's exact spelling and casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellWrapper<'a> {
    /// The interpreter word as written, e.g. `bash` or `SH`.
    pub interpreter: &'a str,
    /// The quoted argument to `-c`, without its quotes.
    pub payload: &'a str,
}
