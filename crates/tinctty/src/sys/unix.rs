use crate::Stream;

/// Unix supports `isatty()`.
pub(crate) const HAS_TERMINAL_DETECTION: bool = true;

/// Determine whether the standard stream is connected to a terminal device.
pub(crate) fn is_terminal(stream: Stream) -> bool {
    let fd = match stream {
        Stream::Stdout => libc::STDOUT_FILENO,
        Stream::Stderr => libc::STDERR_FILENO,
    };

    // SAFETY: isatty() only inspects the file descriptor and reports a closed
    // or invalid descriptor through its return value.
    unsafe { libc::isatty(fd) == 1 }
}
