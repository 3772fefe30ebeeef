// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod controller;
mod error;
mod handler;
mod result;

#[cfg(test)]
mod tests;

pub use controller::{ReservationSaveController, preflight_create, preflight_update};
pub use error::HandlerError;
pub use handler::{HandleOutcome, ReservationHandler};
pub use result::ControllerResult;
