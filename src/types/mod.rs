//! Common types used across the Yobit client library.

pub mod common;

pub use common::*;
