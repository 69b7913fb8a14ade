use std::io::{Result, Stderr, Stdout, Write};

use tracing::trace;

use crate::{Context, Destination, Style};

/// A writer that injects escape sequences only when they should be emitted.
///
/// A style writer decorates a byte sink with the sink's [`Destination`] and a
/// styling [`Context`]. [`StyleWriter::emit`] consults the context and either
/// writes the serialized style straight to the sink or does nothing at all.
/// Regular text goes through the writer's [`Write`] implementation and is
/// never altered. The writer neither buffers nor flushes on its own.
///
/// # Example
///
/// ```
/// # use std::io::Write;
/// # use tinct::{Color, Context, Destination, Effect, FixedProbe, Mode, Reset, StyleWriter};
/// # use tinct::opt::Options;
/// let context = Context::with_options(&Options::builder()
///     .mode(Mode::Always)
///     .probe(FixedProbe::new())
///     .build());
///
/// let mut writer = StyleWriter::with_context(Vec::new(), Destination::Other, &context);
/// writer.emit(Color::Red + Effect::Bold)?;
/// write!(writer, "Wow!")?;
/// writer.emit(Reset)?;
/// assert_eq!(writer.into_inner(), b"\x1b[1;31mWow!\x1b[0m");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct StyleWriter<'c, W: Write> {
    inner: W,
    destination: Destination,
    context: &'c Context,
}

impl StyleWriter<'static, Stdout> {
    /// Create a new style writer for standard output with the process-wide
    /// context.
    pub fn stdout() -> Self {
        Self::with_context(std::io::stdout(), Destination::Stdout, Context::global())
    }
}

impl StyleWriter<'static, Stderr> {
    /// Create a new style writer for standard error with the process-wide
    /// context.
    pub fn stderr() -> Self {
        Self::with_context(std::io::stderr(), Destination::Stderr, Context::global())
    }
}

impl<W: Write> StyleWriter<'static, W> {
    /// Create a new style writer for some byte sink other than standard output
    /// or standard error with the process-wide context.
    pub fn new(inner: W) -> Self {
        Self::with_context(inner, Destination::Other, Context::global())
    }
}

impl<'c, W: Write> StyleWriter<'c, W> {
    /// Create a new style writer for the byte sink, destination, and context.
    pub fn with_context(inner: W, destination: Destination, context: &'c Context) -> Self {
        Self {
            inner,
            destination,
            context,
        }
    }

    /// Get the destination.
    pub fn destination(&self) -> Destination {
        self.destination
    }

    /// Get the context.
    pub fn context(&self) -> &'c Context {
        self.context
    }

    /// Determine whether escape sequences are currently written.
    pub fn is_enabled(&self) -> bool {
        self.context.should_emit(self.destination)
    }

    /// Emit the style.
    ///
    /// If escape sequences should be written, this method writes the style's
    /// escape sequences to the byte sink. Otherwise, it writes nothing.
    /// Errors of the underlying sink are returned as is.
    pub fn emit(&mut self, style: impl Into<Style>) -> Result<()> {
        let style = style.into();
        if !self.is_enabled() {
            trace!(destination = ?self.destination, ?style, "suppressed escape sequences");
            return Ok(());
        }

        write!(self.inner, "{}", style)
    }

    /// Get a reference to the byte sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the byte sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the byte sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for StyleWriter<'_, W> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.inner.write(buf)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.inner.write_all(buf)
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}

// ==========================================================================================================
