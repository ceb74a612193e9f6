use std::convert::Infallible;

use embedded_io::{ErrorType, Write};

/// In-memory sink collecting everything written to it.
#[derive(Default)]
pub struct Capture {
    bytes: Vec<u8>,
}

impl Capture {
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.bytes).expect("demo output is valid utf-8")
    }
}

impl ErrorType for Capture {
    type Error = Infallible;
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
