//! # Tinct 🖍 Tty
//!
//! This crate answers the two questions a program must settle before writing
//! ANSI escape sequences: Does the environment plausibly support ANSI styling?
//! And is the output stream connected to a terminal? Its only dependencies are
//! [`libc`](https://crates.io/crates/libc) on Unix for `isatty()` and
//! [`tracing`](https://crates.io/crates/tracing) for diagnostic logging.
//!
//!   * [`styling_supported`] implements the environment heuristic by checking
//!     whether `TERM` names one of the well-known [`env::ANSI_TERMINALS`].
//!   * A [`Probe`] supplies the raw facts. [`SystemProbe`] asks the operating
//!     system, [`FixedProbe`] answers with application-defined values.
//!   * [`Capabilities`] caches both facts. The environment heuristic is
//!     computed once, whereas the terminal status of standard output and
//!     standard error can be re-checked at any time.
//!
//! On platforms other than Unix, terminal detection is not available. In that
//! case, every stream is treated as not being a terminal and the environment
//! as not supporting styling.
//!
//!
//! # Example
//!
//! ```
//! # use tinctty::{Capabilities, FixedProbe, Stream};
//! let caps = Capabilities::new(
//!     FixedProbe::new()
//!         .with_term("xterm-256color")
//!         .with_terminal(Stream::Stderr, true),
//! );
//!
//! assert!(caps.environment_supports_styling());
//! assert!(!caps.is_interactive_terminal(Some(Stream::Stdout)));
//! assert!(caps.is_interactive_terminal(Some(Stream::Stderr)));
//! assert!(!caps.is_interactive_terminal(None));
//! ```

mod caps;
pub mod env;
mod probe;
mod sys;

pub use caps::Capabilities;
pub use env::{styling_supported, Env, Environment};
pub use probe::{FixedProbe, Probe, Stream, SystemProbe};
