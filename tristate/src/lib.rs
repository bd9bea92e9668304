//! A three-state `Result`: nothing yet, a success value, or a typed error.
//!
//! Failures are plain data ([`ErrorInfo`]) and are inspected with
//! [`Result::match_with`], chained with [`Result::on_success`] and turned back
//! into values with [`Result::recover`].
#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]

extern crate alloc;

pub mod errors;
pub mod result;

pub use errors::{AccessError, ErrorInfo};
pub use result::{match_with, Content, Result};
