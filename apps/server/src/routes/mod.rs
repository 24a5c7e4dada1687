//! HTTP route handlers

pub mod quiz;
pub mod stats;
pub mod words;
