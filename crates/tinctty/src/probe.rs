use std::collections::HashMap;
use std::ffi::OsString;
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::env::{Env, Environment, TERM};
use crate::sys;

/// A well-known standard output stream.
///
/// Only these two streams can be probed for being terminals. Any other
/// destination, whether file, pipe, or in-memory buffer, is treated as not
/// interactive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

impl Stream {
    /// Get the stream's name.
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }

    #[inline]
    pub(crate) const fn index(&self) -> usize {
        match *self {
            Self::Stdout => 0,
            Self::Stderr => 1,
        }
    }
}

impl core::fmt::Display for Stream {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source of terminal capability facts.
///
/// A probe answers two questions: What is in the environment and is a given
/// standard stream a terminal? [`SystemProbe`] asks the operating system,
/// whereas [`FixedProbe`] answers from values set by the application or test.
///
/// This trait is object-safe.
pub trait Probe: Environment + core::fmt::Debug + Send + Sync {
    /// Determine whether the stream is connected to a terminal device.
    fn is_terminal(&self, stream: Stream) -> bool;

    /// Determine whether this probe can detect terminals at all.
    ///
    /// When this method returns `false`, the environment is considered to not
    /// support styling either.
    fn has_terminal_detection(&self) -> bool {
        true
    }
}

macro_rules! delegate_probe {
    ($wrapper:ident) => {
        impl<P: Probe + ?Sized> Environment for $wrapper<P> {
            fn read_os(&self, key: &str) -> Option<OsString> {
                (**self).read_os(key)
            }
        }

        impl<P: Probe + ?Sized> Probe for $wrapper<P> {
            fn is_terminal(&self, stream: Stream) -> bool {
                (**self).is_terminal(stream)
            }

            fn has_terminal_detection(&self) -> bool {
                (**self).has_terminal_detection()
            }
        }
    };
}

// A boxed probe is a probe.
delegate_probe!(Box);
// A shared probe is a probe.
delegate_probe!(Arc);

// ----------------------------------------------------------------------------------------------------------

/// The probe for the current process and platform.
///
/// On Unix, it reads the process environment and uses `isatty()`. On other
/// platforms, it has no terminal detection.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProbe;

impl Environment for SystemProbe {
    fn read_os(&self, key: &str) -> Option<OsString> {
        Env.read_os(key)
    }
}

impl Probe for SystemProbe {
    fn is_terminal(&self, stream: Stream) -> bool {
        sys::is_terminal(stream)
    }

    fn has_terminal_detection(&self) -> bool {
        sys::HAS_TERMINAL_DETECTION
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A probe with application-defined answers.
///
/// The environment bindings are fixed upon construction. The terminal status
/// of both streams can be updated at any time, including while the probe is
/// shared through an [`Arc`], which makes it possible to simulate a stream
/// being redirected.
///
/// # Example
///
/// ```
/// # use tinctty::{Capabilities, FixedProbe, Stream};
/// # use std::sync::Arc;
/// let probe = Arc::new(FixedProbe::new().with_term("xterm").with_terminal(Stream::Stdout, true));
/// let caps = Capabilities::new(probe.clone());
/// assert!(caps.is_interactive_terminal(Some(Stream::Stdout)));
///
/// probe.set_terminal(Stream::Stdout, false);
/// assert!(caps.is_interactive_terminal(Some(Stream::Stdout)));
/// caps.recheck_terminal_status();
/// assert!(!caps.is_interactive_terminal(Some(Stream::Stdout)));
/// ```
#[derive(Debug)]
pub struct FixedProbe {
    bindings: HashMap<String, OsString>,
    terminals: [AtomicBool; 2],
    detection: bool,
}

impl Default for FixedProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedProbe {
    /// Create a new probe with an empty environment, no terminals, and
    /// terminal detection.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            terminals: [AtomicBool::new(false), AtomicBool::new(false)],
            detection: true,
        }
    }

    /// Bind the environment variable.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.bindings.insert(key.into(), value.into());
        self
    }

    /// Bind `TERM` to the given value.
    #[must_use]
    pub fn with_term(self, value: impl Into<OsString>) -> Self {
        self.with_var(TERM, value)
    }

    /// Set whether the stream is a terminal.
    #[must_use]
    pub fn with_terminal(self, stream: Stream, is_terminal: bool) -> Self {
        self.set_terminal(stream, is_terminal);
        self
    }

    /// Simulate a platform without terminal detection.
    #[must_use]
    pub fn without_terminal_detection(mut self) -> Self {
        self.detection = false;
        self
    }

    /// Update whether the stream is a terminal.
    pub fn set_terminal(&self, stream: Stream, is_terminal: bool) {
        self.terminals[stream.index()].store(is_terminal, Ordering::Relaxed);
    }
}

impl Environment for FixedProbe {
    fn read_os(&self, key: &str) -> Option<OsString> {
        self.bindings.get(key).cloned()
    }
}

impl Probe for FixedProbe {
    fn is_terminal(&self, stream: Stream) -> bool {
        self.detection && self.terminals[stream.index()].load(Ordering::Relaxed)
    }

    fn has_terminal_detection(&self) -> bool {
        self.detection
    }
}
