use core::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

use tracing::debug;

use crate::env::{styling_supported, TERM};
use crate::{Probe, Stream, SystemProbe};

// The states of a cached terminal flag.
const UNKNOWN: u8 = 0;
const NOT_A_TERMINAL: u8 = 1;
const TERMINAL: u8 = 2;

/// The cached capabilities of the runtime environment.
///
/// Capabilities comprise two kinds of facts. First, whether the environment
/// plausibly supports ANSI styling at all. That fact is determined on first
/// use and then remains fixed for the lifetime of the instance. Second,
/// whether standard output and standard error are connected to terminals.
/// Those facts are also determined on first use, but they can change, e.g.,
/// when a stream is redirected after fork. Hence
/// [`Capabilities::recheck_terminal_status`] probes them again.
///
/// All methods take `&self` and are safe to call from several threads at
/// once. Each terminal flag is updated atomically on its own.
#[derive(Debug)]
pub struct Capabilities {
    probe: Box<dyn Probe>,
    styling: OnceLock<bool>,
    terminals: [AtomicU8; 2],
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::new(SystemProbe)
    }
}

impl Capabilities {
    /// Create new capabilities backed by the given probe.
    pub fn new(probe: impl Probe + 'static) -> Self {
        Self {
            probe: Box::new(probe),
            styling: OnceLock::new(),
            terminals: [AtomicU8::new(UNKNOWN), AtomicU8::new(UNKNOWN)],
        }
    }

    /// Determine whether the platform supports terminal detection.
    pub fn has_terminal_detection(&self) -> bool {
        self.probe.has_terminal_detection()
    }

    /// Determine whether the environment plausibly supports ANSI styling.
    ///
    /// The result is computed once and cached. Without terminal detection,
    /// this method always returns `false`.
    pub fn environment_supports_styling(&self) -> bool {
        *self.styling.get_or_init(|| {
            if !self.probe.has_terminal_detection() {
                debug!("platform lacks terminal detection, treating styling as unsupported");
                return false;
            }

            let supported = styling_supported(&*self.probe);
            debug!(
                term = ?self.probe.read_os(TERM),
                supported, "checked environment for ANSI styling support"
            );
            supported
        })
    }

    /// Determine whether the destination is an interactive terminal.
    ///
    /// `None` stands for any destination other than the two standard streams
    /// and always yields `false`. For a standard stream, this method returns
    /// the cached status, probing the stream on first use. A first probe
    /// only fills an empty slot, so it never overwrites the result of a
    /// concurrent [`Capabilities::recheck_terminal_status`].
    pub fn is_interactive_terminal(&self, stream: Option<Stream>) -> bool {
        let Some(stream) = stream else {
            return false;
        };

        let slot = &self.terminals[stream.index()];
        match slot.load(Ordering::Acquire) {
            TERMINAL => true,
            NOT_A_TERMINAL => false,
            _ => {
                let state = self.probe_stream(stream);
                slot.compare_exchange(UNKNOWN, state, Ordering::AcqRel, Ordering::Acquire)
                    .map_or_else(|current| current == TERMINAL, |_| state == TERMINAL)
            }
        }
    }

    /// Probe both standard streams again and update the cached status.
    ///
    /// Call this method after the application may have redirected a standard
    /// stream. The environment heuristic is not recomputed.
    pub fn recheck_terminal_status(&self) {
        for stream in [Stream::Stdout, Stream::Stderr] {
            let state = self.probe_stream(stream);
            self.terminals[stream.index()].store(state, Ordering::Release);
        }
    }

    fn probe_stream(&self, stream: Stream) -> u8 {
        let is_terminal = self.probe.is_terminal(stream);
        debug!(%stream, is_terminal, "probed stream for terminal");
        if is_terminal {
            TERMINAL
        } else {
            NOT_A_TERMINAL
        }
    }
}

#[cfg(test)]
mod test {
    use super::Capabilities;
    use crate::{Environment, FixedProbe, Probe, Stream};
    use core::sync::atomic::{AtomicBool, Ordering};
    use std::ffi::OsString;
    use std::sync::{Arc, Barrier};

    /// A probe whose first stdout check pauses until the test releases it.
    #[derive(Debug)]
    struct PausingProbe {
        stdout: AtomicBool,
        pause: AtomicBool,
        entered: Barrier,
        released: Barrier,
    }

    impl PausingProbe {
        fn new(stdout: bool) -> Self {
            Self {
                stdout: AtomicBool::new(stdout),
                pause: AtomicBool::new(true),
                entered: Barrier::new(2),
                released: Barrier::new(2),
            }
        }
    }

    impl Environment for PausingProbe {
        fn read_os(&self, _key: &str) -> Option<OsString> {
            None
        }
    }

    impl Probe for PausingProbe {
        fn is_terminal(&self, stream: Stream) -> bool {
            if stream != Stream::Stdout {
                return false;
            }

            let is_terminal = self.stdout.load(Ordering::SeqCst);
            if self.pause.swap(false, Ordering::SeqCst) {
                self.entered.wait();
                self.released.wait();
            }
            is_terminal
        }
    }

    #[test]
    fn test_environment_heuristic() {
        let caps = Capabilities::new(FixedProbe::new().with_term("xterm-256color"));
        assert!(caps.environment_supports_styling());
        assert!(caps.has_terminal_detection());

        let caps = Capabilities::new(FixedProbe::new());
        assert!(!caps.environment_supports_styling());

        let caps = Capabilities::new(FixedProbe::new().with_term("dumb"));
        assert!(!caps.environment_supports_styling());

        let caps = Capabilities::new(
            FixedProbe::new()
                .with_term("xterm")
                .without_terminal_detection(),
        );
        assert!(!caps.environment_supports_styling());
        assert!(!caps.has_terminal_detection());
    }

    #[test]
    fn test_other_destinations() {
        let caps = Capabilities::new(
            FixedProbe::new()
                .with_terminal(Stream::Stdout, true)
                .with_terminal(Stream::Stderr, true),
        );
        assert!(!caps.is_interactive_terminal(None));
        assert!(caps.is_interactive_terminal(Some(Stream::Stdout)));
        assert!(caps.is_interactive_terminal(Some(Stream::Stderr)));
    }

    #[test]
    fn test_caching_and_recheck() {
        let probe = Arc::new(FixedProbe::new().with_terminal(Stream::Stdout, true));
        let caps = Capabilities::new(Arc::clone(&probe));

        assert!(caps.is_interactive_terminal(Some(Stream::Stdout)));
        assert!(!caps.is_interactive_terminal(Some(Stream::Stderr)));

        // Redirect both streams without telling the capabilities.
        probe.set_terminal(Stream::Stdout, false);
        probe.set_terminal(Stream::Stderr, true);
        assert!(caps.is_interactive_terminal(Some(Stream::Stdout)));
        assert!(!caps.is_interactive_terminal(Some(Stream::Stderr)));

        caps.recheck_terminal_status();
        assert!(!caps.is_interactive_terminal(Some(Stream::Stdout)));
        assert!(caps.is_interactive_terminal(Some(Stream::Stderr)));

        caps.recheck_terminal_status();
        assert!(!caps.is_interactive_terminal(Some(Stream::Stdout)));
        assert!(caps.is_interactive_terminal(Some(Stream::Stderr)));
    }

    #[test]
    fn test_heuristic_is_not_rechecked() {
        let caps = Capabilities::new(FixedProbe::new().with_term("linux"));
        assert!(caps.environment_supports_styling());
        caps.recheck_terminal_status();
        assert!(caps.environment_supports_styling());
    }

    #[test]
    fn test_concurrent_first_use() {
        let caps = Arc::new(Capabilities::new(
            FixedProbe::new()
                .with_term("rxvt")
                .with_terminal(Stream::Stderr, true),
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let caps = Arc::clone(&caps);
                std::thread::spawn(move || {
                    (
                        caps.environment_supports_styling(),
                        caps.is_interactive_terminal(Some(Stream::Stdout)),
                        caps.is_interactive_terminal(Some(Stream::Stderr)),
                    )
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), (true, false, true));
        }
    }

    #[test]
    fn test_recheck_wins_over_slow_first_probe() {
        let probe = Arc::new(PausingProbe::new(true));
        let caps = Arc::new(Capabilities::new(Arc::clone(&probe)));

        let reader = {
            let caps = Arc::clone(&caps);
            std::thread::spawn(move || caps.is_interactive_terminal(Some(Stream::Stdout)))
        };

        // The first probe has seen a terminal but not yet stored the result.
        probe.entered.wait();
        probe.stdout.store(false, Ordering::SeqCst);
        caps.recheck_terminal_status();
        probe.released.wait();

        assert!(!reader.join().unwrap());
        assert!(!caps.is_interactive_terminal(Some(Stream::Stdout)));
    }
}
