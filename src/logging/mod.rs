// file: src/logging/mod.rs
// version: 1.0.0
// guid: a4c18e72-3b6f-4d90-b521-68f0d3c7a914

//! Logging setup

pub mod logger;
