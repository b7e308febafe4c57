//! # peek-core
//!
//! Core types shared by the peek UI smoke checker.
//!
//! Peek drives a headless Chromium over the Chrome DevTools Protocol to confirm
//! that a locally running web application renders the UI markers it is expected
//! to render, and captures screenshots as evidence. This crate holds the unified
//! error type every other peek crate returns.

mod error;

pub use error::{PeekError, Result};
