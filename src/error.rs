/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/*
 * Copyright 2020 Zachary Schneider
 */

use std::fmt;
use std::io;

use strum_macros::{Display, EnumIter};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Op {
    Write,
    Flush,
    Close,
}

#[derive(Error, Debug)]
pub enum Error {
    /// A write or flush was attempted after the sink was closed.
    #[error("attempted to {0} a sink after it was closed")]
    Closed(Op),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{0}")]
    Multiple(Failures),
}

impl From<Failures> for Error {
    fn from(failures: Failures) -> Error {
        Error::Multiple(failures)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::Io(inner) => inner,
            other => io::Error::new(io::ErrorKind::Other, other),
        }
    }
}

/// An error raised by the sink at `index` during `op`.
#[derive(Debug)]
pub struct Failure {
    pub index: usize,
    pub op: Op,
    pub error: Error,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "sink {} failed to {}: {}", self.index, self.op, self.error)
    }
}

/// Every failure observed during a single fan-out, in sink order. Never empty.
#[derive(Debug)]
pub struct Failures {
    failures: Vec<Failure>,
}

impl Failures {
    pub(crate) fn new(first: Failure) -> Failures {
        Failures {
            failures: vec![first],
        }
    }

    pub(crate) fn push(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    pub fn first(&self) -> &Failure {
        &self.failures[0]
    }

    pub fn into_first(mut self) -> Error {
        self.failures.swap_remove(0).error
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.failures.iter()
    }
}

impl IntoIterator for Failures {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a Failures {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl fmt::Display for Failures {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} sink(s) failed", self.failures.len())?;

        for failure in &self.failures {
            write!(f, "; {}", failure)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn failure(index: usize, msg: &str) -> Failure {
        Failure {
            index,
            op: Op::Write,
            error: Error::Io(io::Error::new(io::ErrorKind::Other, msg.to_string())),
        }
    }

    #[test]
    fn test_op_display() {
        assert_eq!(Op::Write.to_string(), "write");
        assert_eq!(Op::Flush.to_string(), "flush");
        assert_eq!(Op::Close.to_string(), "close");
    }

    #[test]
    fn test_closed_message() {
        for op in Op::iter() {
            assert_eq!(
                Error::Closed(op).to_string(),
                format!("attempted to {} a sink after it was closed", op)
            );
        }

        assert_eq!(
            Error::Closed(Op::Flush).to_string(),
            "attempted to flush a sink after it was closed"
        );
    }

    #[test]
    fn test_failures_keep_order() {
        let mut failures = Failures::new(failure(2, "first"));
        failures.push(failure(4, "second"));

        assert_eq!(failures.len(), 2);
        assert_eq!(failures.first().index, 2);

        let indexes: Vec<usize> = failures.iter().map(|f| f.index).collect();
        assert_eq!(indexes, vec![2, 4]);

        assert_eq!(
            failures.to_string(),
            "2 sink(s) failed; sink 2 failed to write: first; sink 4 failed to write: second"
        );

        assert_eq!(failures.into_first().to_string(), "first");
    }

    #[test]
    fn test_into_io_error() {
        let err: io::Error = Error::Io(io::Error::new(io::ErrorKind::BrokenPipe, "gone")).into();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "gone");

        let err: io::Error = Error::Closed(Op::Write).into();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(err.get_ref().unwrap().downcast_ref::<Error>().is_some());
    }
}
