use std::cell::RefCell;
use std::rc::Rc;

use sha3::{Digest, Sha3_256};

use crate::error::{Error, Op, Result};
use crate::io::Sink;

/// Read side of a `DigestSink`. Holds the hex digest once the sink is closed.
#[derive(Clone, Default)]
pub struct DigestHandle {
    digest: Rc<RefCell<Option<String>>>,
}

impl DigestHandle {
    pub fn get(&self) -> Option<String> {
        self.digest.borrow().clone()
    }
}

/// Hashes everything written to it with SHA3-256.
pub struct DigestSink {
    hasher: Option<Sha3_256>,
    handle: DigestHandle,
}

impl DigestSink {
    pub fn new() -> DigestSink {
        DigestSink {
            hasher: Some(Sha3_256::new()),
            handle: DigestHandle::default(),
        }
    }

    pub fn handle(&self) -> DigestHandle {
        self.handle.clone()
    }
}

impl Default for DigestSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for DigestSink {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        match self.hasher.as_mut() {
            Some(hasher) => {
                hasher.update(buf);
                Ok(())
            }
            None => Err(Error::Closed(Op::Write)),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self.hasher {
            Some(_) => Ok(()),
            None => Err(Error::Closed(Op::Flush)),
        }
    }

    fn close(&mut self) -> Result<()> {
        if let Some(hasher) = self.hasher.take() {
            *self.handle.digest.borrow_mut() = Some(format!("{:x}", hasher.finalize()));
        }

        Ok(())
    }
}
