use embedded_io::{Error, ErrorKind, ErrorType, Write};
use std::io::{self, StdoutLock};

/// A `std::io` writer, by default process standard output, behind the
/// `embedded_io` write traits.
pub struct Console<W = StdoutLock<'static>> {
    inner: W,
}

impl Console {
    pub fn lock() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: io::Write> Console<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

#[derive(Debug)]
pub struct ConsoleError(io::ErrorKind);

impl Error for ConsoleError {
    fn kind(&self) -> ErrorKind {
        match self.0 {
            io::ErrorKind::BrokenPipe => ErrorKind::BrokenPipe,
            io::ErrorKind::Interrupted => ErrorKind::Interrupted,
            io::ErrorKind::OutOfMemory => ErrorKind::OutOfMemory,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::WriteZero => ErrorKind::WriteZero,
            _ => ErrorKind::Other,
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        Self(err.kind())
    }
}

impl<W: io::Write> ErrorType for Console<W> {
    type Error = ConsoleError;
}

impl<W: io::Write> Write for Console<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        match io::Write::write(&mut self.inner, buf)? {
            // write_all treats Ok(0) as a bug in the sink, report it instead
            0 if !buf.is_empty() => Err(ConsoleError(io::ErrorKind::WriteZero)),
            written => Ok(written),
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(io::Write::flush(&mut self.inner)?)
    }
}
