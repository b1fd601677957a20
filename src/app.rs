use std::io::{self, Read, Write};

use anyhow::{Context, Error};
use log::{debug, info};

use crate::config::{Options, ZSTD_LEVEL};
use crate::io::{DigestHandle, DigestSink, Sink, TeeWriter, WriteSink, ZstdSink};

pub struct Tee {
    options: Options,
}

impl Tee {
    pub fn new(options: Options) -> Tee {
        Tee { options }
    }

    /// Copies `input` to `output` and every configured file, then closes them
    /// all. Returns the hex SHA3-256 digest of the input when requested.
    pub fn run<R: Read, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<String>, Error> {
        let mut sinks: Vec<Box<dyn Sink + '_>> = vec![Box::new(WriteSink::new(output))];

        for path in &self.options.files {
            let file = self
                .options
                .open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;

            debug!("teeing to {}", path.display());
            sinks.push(Box::new(WriteSink::new(file)));
        }

        if let Some(path) = &self.options.zstd {
            let file = self
                .options
                .open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;

            debug!("teeing compressed copy to {}", path.display());
            sinks.push(Box::new(ZstdSink::new(file, ZSTD_LEVEL)?));
        }

        let mut handle: Option<DigestHandle> = None;
        if self.options.digest {
            let sink = DigestSink::new();
            handle = Some(sink.handle());
            sinks.push(Box::new(sink));
        }

        let mut tee = TeeWriter::new(sinks);

        let copied = io::copy(input, &mut tee);
        if let Ok(bytes) = &copied {
            info!("copied {} bytes to {} sink(s)", bytes, tee.len());
        }

        let closed = tee.close();

        copied.context("failed to copy input")?;
        closed.context("failed to close outputs")?;

        Ok(handle.and_then(|h| h.get()))
    }
}
