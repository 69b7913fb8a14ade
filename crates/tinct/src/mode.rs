/// The policy for emitting escape sequences.
///
/// Currently four modes are supported:
///
///   * __Always__ emits escape sequences no matter the destination or
///     environment.
///
///   * __Auto__ emits escape sequences only if the environment plausibly
///     supports ANSI styling *and* the destination is standard output or
///     standard error connected to a terminal. This is the default mode.
///
///   * __Semi__ emits escape sequences if the environment plausibly supports
///     ANSI styling, no matter the destination. It is useful for output that
///     is piped into a pager that understands escape sequences.
///
///   * __Never__ does not emit escape sequences.
///
/// On platforms without terminal detection, Auto and Semi behave like Never.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Always emit.
    Always,
    /// Emit for terminals in a supporting environment.
    #[default]
    Auto,
    /// Emit in a supporting environment.
    Semi,
    /// Never emit.
    Never,
}

impl Mode {
    #[inline]
    pub(crate) const fn as_u8(&self) -> u8 {
        match *self {
            Self::Always => 0,
            Self::Auto => 1,
            Self::Semi => 2,
            Self::Never => 3,
        }
    }

    #[inline]
    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Always,
            2 => Self::Semi,
            3 => Self::Never,
            _ => Self::Auto,
        }
    }

    /// Get the mode's lower-case name.
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Always => "always",
            Self::Auto => "auto",
            Self::Semi => "semi",
            Self::Never => "never",
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

impl core::str::FromStr for Mode {
    type Err = ParseModeError;

    /// Parse the mode's name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [Self::Always, Self::Auto, Self::Semi, Self::Never]
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
            .ok_or(ParseModeError)
    }
}

/// An error indicating an unrecognized mode name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseModeError;

impl ParseModeError {
    /// Turn the error into an error message.
    pub fn as_str(&self) -> &'static str {
        "mode must be one of always, auto, semi, or never"
    }
}

impl core::fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ParseModeError {}
