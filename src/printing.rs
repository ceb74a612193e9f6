use crate::error::PrintError;

use core::fmt::{self, Write as _};
use embedded_io::{Error as _, ErrorKind, Write};

/// Bridges `core::fmt` into an `embedded_io` sink, keeping the sink's error
/// kind that `fmt::Error` would otherwise swallow.
struct FmtSink<'a, W: Write> {
    inner: &'a mut W,
    error: Option<ErrorKind>,
}

impl<'a, W: Write> FmtSink<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        Self { inner, error: None }
    }

    fn take_error(&mut self) -> PrintError {
        self.error.take().map_or(PrintError::Format, PrintError::Io)
    }
}

impl<W: Write> fmt::Write for FmtSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e.kind());
            fmt::Error
        })
    }
}

/// Writes one `Node <index>: <value>` line per pair, in the order given.
pub fn write_nodes<W, I>(sink: &mut W, nodes: I) -> Result<(), PrintError>
where
    W: Write,
    I: IntoIterator<Item = (usize, i32)>,
{
    let mut out = FmtSink::new(sink);
    for (index, value) in nodes {
        writeln!(out, "Node {index}: {value}").map_err(|_| out.take_error())?;
    }
    Ok(())
}

/// Writes `text` followed by a newline.
pub fn write_line<W>(sink: &mut W, text: &str) -> Result<(), PrintError>
where
    W: Write,
{
    let mut out = FmtSink::new(sink);
    writeln!(out, "{text}").map_err(|_| out.take_error())
}

pub fn flush<W>(sink: &mut W) -> Result<(), PrintError>
where
    W: Write,
{
    sink.flush().map_err(|e| PrintError::Io(e.kind()))
}
