use std::io::Write;

use crate::error::{Error, Op, Result};
use crate::io::Sink;

/// Lifts any `std::io::Write` into a `Sink`.
///
/// Closing flushes the writer and then drops it, which releases file handles.
pub struct WriteSink<W: Write> {
    inner: Option<W>,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> WriteSink<W> {
        WriteSink { inner: Some(inner) }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    fn inner(&mut self, op: Op) -> Result<&mut W> {
        self.inner.as_mut().ok_or(Error::Closed(op))
    }
}

impl<W: Write> Sink for WriteSink<W> {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.inner(Op::Write)?.write_all(buf)?;

        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner(Op::Flush)?.flush()?;

        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        match self.inner.take() {
            Some(mut inner) => Ok(inner.flush()?),
            None => Ok(()),
        }
    }
}
