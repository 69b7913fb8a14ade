use core::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

use tinctty::{Capabilities, Stream};
use tracing::debug;

use crate::opt::Options;
use crate::{Mode, Style};

/// The destination of styled output.
///
/// Only standard output and standard error can be probed for being terminals.
/// Every other destination, whether file, pipe, or in-memory buffer, is
/// [`Destination::Other`] and never considered interactive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
    /// Any other byte sink.
    #[default]
    Other,
}

impl Destination {
    /// Get the standard stream for this destination.
    pub const fn stream(&self) -> Option<Stream> {
        match *self {
            Self::Stdout => Some(Stream::Stdout),
            Self::Stderr => Some(Stream::Stderr),
            Self::Other => None,
        }
    }
}

impl From<Stream> for Destination {
    fn from(value: Stream) -> Self {
        match value {
            Stream::Stdout => Self::Stdout,
            Stream::Stderr => Self::Stderr,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A styling context.
///
/// A context combines the current [`Mode`] with the cached [`Capabilities`]
/// of the environment and decides whether escape sequences should be written
/// to a given [`Destination`]. The process-wide context is available through
/// [`Context::global`] and the crate's free functions. Tests and applications
/// that want to keep their own policy create fresh contexts with
/// [`Context::with_options`].
///
/// All methods take `&self`. The mode is stored atomically and can be changed
/// at any time, from any thread.
#[derive(Debug)]
pub struct Context {
    mode: AtomicU8,
    capabilities: Capabilities,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new context with the default options.
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    /// Create a new context with the given options.
    pub fn with_options(options: &Options) -> Self {
        Self {
            mode: AtomicU8::new(options.mode().as_u8()),
            capabilities: Capabilities::new(Arc::clone(options.probe())),
        }
    }

    /// Get the process-wide context.
    ///
    /// It is created with the default options on first use.
    pub fn global() -> &'static Context {
        static GLOBAL: OnceLock<Context> = OnceLock::new();
        GLOBAL.get_or_init(Context::new)
    }

    /// Get the current mode.
    pub fn mode(&self) -> Mode {
        Mode::from_u8(self.mode.load(Ordering::Relaxed))
    }

    /// Set the current mode.
    pub fn set_mode(&self, mode: Mode) {
        let old = Mode::from_u8(self.mode.swap(mode.as_u8(), Ordering::Relaxed));
        debug!(%old, new = %mode, "changed styling mode");
    }

    /// Get the capabilities.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Probe standard output and standard error again.
    ///
    /// Call this method after redirecting a standard stream, e.g., after fork.
    pub fn recheck_terminal_status(&self) {
        self.capabilities.recheck_terminal_status();
    }

    /// Determine whether escape sequences should be written to the
    /// destination.
    ///
    /// | Mode   | Emit if                                            |
    /// | :----- | :------------------------------------------------- |
    /// | Always | always                                             |
    /// | Auto   | environment supports styling and destination is a TTY |
    /// | Semi   | environment supports styling                       |
    /// | Never  | never                                              |
    pub fn should_emit(&self, destination: Destination) -> bool {
        let caps = &self.capabilities;
        match self.mode() {
            Mode::Always => true,
            Mode::Never => false,
            Mode::Semi => caps.environment_supports_styling(),
            Mode::Auto => {
                caps.environment_supports_styling()
                    && caps.is_interactive_terminal(destination.stream())
            }
        }
    }

    /// Apply the style to the text.
    ///
    /// If escape sequences should be written to the destination, this method
    /// returns the style, the text, and a reset. Otherwise, it returns the text
    /// only.
    pub fn paint(
        &self,
        destination: Destination,
        style: impl Into<Style>,
        text: impl core::fmt::Display,
    ) -> String {
        let style = style.into();
        if self.should_emit(destination) && !style.is_empty() {
            format!("{}{}{}", style, text, Style::reset())
        } else {
            text.to_string()
        }
    }
}

// ==========================================================================================================
