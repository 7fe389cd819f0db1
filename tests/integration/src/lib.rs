//! Integration test utilities for the relay
//!
//! This crate provides a scripted chat-server peer, a relay harness that
//! runs the full binary pipeline in-process, and webhook payload fixtures.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
