use crate::Stream;

/// Terminal detection is only implemented for Unix.
pub(crate) const HAS_TERMINAL_DETECTION: bool = false;

/// Treat every stream as not connected to a terminal.
pub(crate) fn is_terminal(_: Stream) -> bool {
    false
}
