//! # Tinct 🖍
//!
//! Tinct annotates terminal output with ANSI colors and text effects, but
//! only when the output is headed for a terminal that understands them.
//!
//!
//! ## 1. Overview
//!
//! Tinct's main abstractions are:
//!
//!   * The **codes** [`Reset`], [`Effect`], [`Color`], and [`BgColor`] as well
//!     as [`Code`] wrapping any one of them. Each code displays as its own
//!     escape sequence.
//!   * The **terminal [`Style`]** combining an optional reset with at most one
//!     effect, one foreground color, and one background color. Styles are
//!     composed with `+`, which lets later codes override earlier ones.
//!   * The **[`Mode`]** determining when escape sequences are emitted. By
//!     default, tinct emits escape sequences only if `TERM` indicates an
//!     ANSI-capable terminal and the output goes to standard output or
//!     standard error connected to a terminal.
//!   * The **[`StyleWriter`]** wrapping a byte sink and writing styles to it
//!     only when the current mode and the sink's [`Destination`] allow it.
//!   * The **[`Context`]** holding mode and cached terminal
//!     [`Capabilities`]. The process-wide context backs the free functions
//!     [`set_mode`], [`mode`], [`recheck_terminal_status`], and
//!     [`should_emit`].
//!
//!
//! ## 2. Styling Output
//!
//! Write codes and styles through a [`StyleWriter`] and plain text through its
//! [`Write`](std::io::Write) implementation:
//!
//! ```
//! # use std::io::Write;
//! # use tinct::{Color, Effect, Reset, StyleWriter};
//! let mut out = StyleWriter::stdout();
//! out.emit(Effect::Bold + Color::Red)?;
//! writeln!(out, "Hello world!")?;
//! out.emit(Reset)?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Styles fold from left to right. The last effect, color, and background
//! color win, and a reset discards everything before it:
//!
//! ```
//! # use tinct::{BgColor, Color, Effect, Reset};
//! let style = Effect::Italic + Effect::Bold + Color::Blue + BgColor::Red
//!     + Color::Red + BgColor::Cyan;
//! assert_eq!(format!("{}", style), "\x1b[1;31;46m");
//!
//! assert_eq!(format!("{}", Color::Red + Reset), "\x1b[0m");
//! assert_eq!(format!("{}", Color::Red + Reset + BgColor::Blue), "\x1b[0m\x1b[44m");
//! ```
//!
//!
//! ## 3. Controlling Emission
//!
//! The [`Mode`] overrides automatic detection:
//!
//! ```
//! # use tinct::{Color, Context, Destination, FixedProbe, Mode, StyleWriter};
//! # use tinct::opt::Options;
//! let context = Context::with_options(&Options::builder().probe(FixedProbe::new()).build());
//! let mut out = StyleWriter::with_context(Vec::new(), Destination::Other, &context);
//!
//! out.emit(Color::Red)?;           // Auto: not a terminal
//! context.set_mode(Mode::Always);
//! out.emit(Color::Green)?;         // Always
//! assert_eq!(out.into_inner(), b"\x1b[32m");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! After redirecting standard output or standard error, e.g., after fork, call
//! [`recheck_terminal_status`] so that the cached terminal status is updated.
//!
//! Tinct logs capability detection and mode changes through
//! [`tracing`](https://crates.io/crates/tracing) but does not install a
//! subscriber.

mod code;
mod context;
mod mode;
pub mod opt;
mod style;
mod writer;

pub use code::{BgColor, Code, Color, Effect, Reset, Sgr};
pub use context::{Context, Destination};
pub use mode::{Mode, ParseModeError};
pub use style::Style;
pub use tinctty::{Capabilities, FixedProbe, Probe, Stream, SystemProbe};
pub use writer::StyleWriter;

/// Set the mode of the process-wide context.
pub fn set_mode(mode: Mode) {
    Context::global().set_mode(mode);
}

/// Get the mode of the process-wide context.
pub fn mode() -> Mode {
    Context::global().mode()
}

/// Probe standard output and standard error again for the process-wide
/// context.
pub fn recheck_terminal_status() {
    Context::global().recheck_terminal_status();
}

/// Determine whether the process-wide context emits escape sequences to the
/// destination.
pub fn should_emit(destination: Destination) -> bool {
    Context::global().should_emit(destination)
}
