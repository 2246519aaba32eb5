//! Shared test helpers for `agenda-core` integration tests.
//!
//! Lightweight in-memory ports and appointment fixtures so service tests can
//! focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
