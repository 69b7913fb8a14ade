#[cfg(target_family = "unix")]
mod unix;
#[cfg(not(target_family = "unix"))]
mod other;

#[cfg(target_family = "unix")]
pub(crate) use self::unix::{is_terminal, HAS_TERMINAL_DETECTION};
#[cfg(not(target_family = "unix"))]
pub(crate) use self::other::{is_terminal, HAS_TERMINAL_DETECTION};
