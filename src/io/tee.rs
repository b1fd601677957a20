/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/*
 * Copyright 2020 Zachary Schneider
 */

use std::io;
use std::iter::FromIterator;

use log::{debug, warn};

use crate::error::{Error, Failure, Failures, Op, Result};
use crate::io::Sink;

/// Tees every write, flush and close to all of its sinks.
///
/// Sinks are visited in the order they were given. A failing sink does not stop
/// the operation from reaching the sinks after it; once all of them have been
/// attempted the first error is returned.
///
/// ```
/// use std::io::Cursor;
/// use tee::io::{Sink, TeeWriter, WriteSink};
///
/// let mut first = Vec::new();
/// let mut second = Cursor::new(Vec::new());
///
/// let mut tee = TeeWriter::new(vec![
///     Box::new(WriteSink::new(&mut first)),
///     Box::new(WriteSink::new(&mut second)),
/// ]);
///
/// tee.write(b"hi").unwrap();
/// tee.close().unwrap();
/// drop(tee);
///
/// assert_eq!(first, b"hi");
/// assert_eq!(second.into_inner(), b"hi");
/// ```
pub struct TeeWriter<'a> {
    sinks: Vec<Box<dyn Sink + 'a>>,
    closed: bool,
}

impl<'a> TeeWriter<'a> {
    pub fn new(sinks: Vec<Box<dyn Sink + 'a>>) -> TeeWriter<'a> {
        TeeWriter {
            sinks,
            closed: false,
        }
    }

    /// Number of sinks the tee writes to.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// True when the tee was built without any sinks.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// True once `close` has been called, even if closing a sink failed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Like `write`, but a failing fan-out is reported as `Error::Multiple`
    /// carrying every sink error instead of only the first.
    pub fn try_write(&mut self, buf: &[u8]) -> Result<()> {
        self.ensure_open(Op::Write)?;
        Ok(self.fan_out(Op::Write, |sink| sink.write(buf))?)
    }

    pub fn try_flush(&mut self) -> Result<()> {
        self.ensure_open(Op::Flush)?;
        Ok(self.fan_out(Op::Flush, |sink| sink.flush())?)
    }

    pub fn try_close(&mut self) -> Result<()> {
        Ok(self.close_all()?)
    }

    fn close_all(&mut self) -> std::result::Result<(), Failures> {
        if self.closed {
            return Ok(());
        }

        self.closed = true;
        debug!("closing tee over {} sink(s)", self.sinks.len());

        self.fan_out(Op::Close, |sink| sink.close())
    }

    fn ensure_open(&self, op: Op) -> Result<()> {
        if self.closed {
            return Err(Error::Closed(op));
        }

        Ok(())
    }

    fn fan_out<F>(&mut self, op: Op, mut call: F) -> std::result::Result<(), Failures>
    where
        F: FnMut(&mut Box<dyn Sink + 'a>) -> Result<()>,
    {
        let mut failures: Option<Failures> = None;

        for (index, sink) in self.sinks.iter_mut().enumerate() {
            if let Err(error) = call(sink) {
                warn!("sink {} failed to {}: {}", index, op, error);

                let failure = Failure { index, op, error };
                match failures.as_mut() {
                    Some(f) => f.push(failure),
                    None => failures = Some(Failures::new(failure)),
                }
            }
        }

        match failures {
            Some(f) => Err(f),
            None => Ok(()),
        }
    }
}

impl<'a> Sink for TeeWriter<'a> {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.ensure_open(Op::Write)?;
        self.fan_out(Op::Write, |sink| sink.write(buf))
            .map_err(Failures::into_first)
    }

    fn flush(&mut self) -> Result<()> {
        self.ensure_open(Op::Flush)?;
        self.fan_out(Op::Flush, |sink| sink.flush())
            .map_err(Failures::into_first)
    }

    fn close(&mut self) -> Result<()> {
        self.close_all().map_err(Failures::into_first)
    }
}

/// A failed `write` may already have reached some of the sinks, so the whole
/// buffer must not be written again. `Interrupted` is reported as `Other` to
/// keep `write_all` and `io::copy` from retrying it.
impl<'a> io::Write for TeeWriter<'a> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Sink::write(self, buf).map_err(not_retryable)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Sink::flush(self).map_err(not_retryable)?;

        Ok(())
    }
}

fn not_retryable(err: Error) -> io::Error {
    let err = io::Error::from(err);

    match err.kind() {
        io::ErrorKind::Interrupted => io::Error::new(io::ErrorKind::Other, err),
        _ => err,
    }
}

impl<'a> FromIterator<Box<dyn Sink + 'a>> for TeeWriter<'a> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Sink + 'a>>>(iter: I) -> Self {
        TeeWriter::new(iter.into_iter().collect())
    }
}
