//! Helper module for environment variable access.
//!
//! The capability heuristic only ever consults `TERM`. Still, going through
//! the [`Environment`] trait instead of [`std::env`] means that tests and
//! embedding applications can substitute their own bindings.

use std::ffi::OsString;

/// The environment variable naming the terminal type.
pub const TERM: &str = "TERM";

/// Substrings of `TERM` values that indicate support for ANSI escape codes.
///
/// Matching is case-sensitive.
pub const ANSI_TERMINALS: [&str; 14] = [
    "ansi", "color", "console", "cygwin", "gnome", "konsole", "kterm", "linux", "msys", "putty",
    "rxvt", "screen", "vt100", "xterm",
];

/// A trait to abstract over environment variable access.
///
/// Implementors only need to provide [`Environment::read_os`]. The remaining
/// methods build on it.
pub trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Determine whether the environment variable is defined with a non-empty
    /// value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.read_os(key).is_some_and(|v| !v.is_empty())
    }
}

/// The process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct Env;

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Determine whether the environment plausibly supports ANSI styling.
///
/// This function returns `true` if `TERM` contains one of the
/// [`ANSI_TERMINALS`]. An undefined, empty, or non-Unicode `TERM` means no
/// support.
pub fn styling_supported(env: &(impl Environment + ?Sized)) -> bool {
    if !env.is_non_empty(TERM) {
        return false;
    }
    let Ok(term) = env.read(TERM) else {
        return false;
    };

    ANSI_TERMINALS.iter().any(|name| term.contains(name))
}
