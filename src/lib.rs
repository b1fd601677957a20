/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/*
 * Copyright 2020 Zachary Schneider
 */

//! Writers that duplicate their output across any number of sinks.
//!
//! [`io::TeeWriter`] forwards every write, flush and close to each of its
//! sinks in order. A sink that fails does not keep the others from receiving
//! the call; the first error is returned once all of them have been tried.

pub mod app;
pub mod config;
pub mod error;
pub mod io;

pub use error::{Error, Failure, Failures, Op, Result};
