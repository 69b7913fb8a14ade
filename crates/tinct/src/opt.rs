//! Helper module with the options for creating a styling context.
//!
//! This module provides the options for a [`Context`](crate::Context) and the
//! corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use tinct::{Context, FixedProbe, Mode};
//! # use tinct::opt::Options;
//! let options = Options::builder()
//!     .mode(Mode::Semi)
//!     .probe(FixedProbe::new().with_term("xterm"))
//!     .build();
//!
//! assert_eq!(options.mode(), Mode::Semi);
//! let context = Context::with_options(&options);
//! assert_eq!(context.mode(), Mode::Semi);
//! ```

use std::sync::Arc;

use crate::Mode;
use tinctty::{Probe, SystemProbe};

#[derive(Clone, Debug)]
struct OptionData {
    mode: Mode,
    probe: Arc<dyn Probe>,
}

impl OptionData {
    pub fn new() -> Self {
        Self {
            mode: Mode::Auto,
            probe: Arc::new(SystemProbe),
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the initial mode.
    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.0.mode = mode;
        self
    }

    /// Set the probe for environment and terminal status.
    pub fn probe(&mut self, probe: impl Probe + 'static) -> &mut Self {
        self.0.probe = Arc::new(probe);
        self
    }

    /// Set a shared probe for environment and terminal status.
    pub fn shared_probe(&mut self, probe: Arc<dyn Probe>) -> &mut Self {
        self.0.probe = probe;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with the given mode.
    pub fn with_mode(mode: Mode) -> Options {
        Self::builder().mode(mode).build()
    }

    /// Get the initial mode.
    pub fn mode(&self) -> Mode {
        self.0.mode
    }

    /// Get the probe.
    pub fn probe(&self) -> &Arc<dyn Probe> {
        &self.0.probe
    }
}
