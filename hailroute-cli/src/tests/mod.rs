//! Shared test harness modules for the Hailroute CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod decode_unit;
mod encode_unit;
mod helpers;
