use std::io::Write;

use zstd::stream::write::Encoder;

use crate::error::{Error, Op, Result};
use crate::io::Sink;

/// Writes a zstd compressed copy of everything it receives.
///
/// `close` ends the frame and flushes the underlying writer, returning any
/// error from either step.
pub struct ZstdSink<W: Write> {
    encoder: Option<Encoder<'static, W>>,
}

impl<W: Write> ZstdSink<W> {
    pub fn new(inner: W, level: i32) -> Result<ZstdSink<W>> {
        Ok(ZstdSink {
            encoder: Some(Encoder::new(inner, level)?),
        })
    }

    pub fn is_closed(&self) -> bool {
        self.encoder.is_none()
    }

    fn encoder(&mut self, op: Op) -> Result<&mut Encoder<'static, W>> {
        self.encoder.as_mut().ok_or(Error::Closed(op))
    }
}

impl<W: Write> Sink for ZstdSink<W> {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.encoder(Op::Write)?.write_all(buf)?;

        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.encoder(Op::Flush)?.flush()?;

        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(encoder) = self.encoder.take() {
            let mut inner = encoder.finish()?;
            inner.flush()?;
        }

        Ok(())
    }
}
