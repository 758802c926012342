// file: src/utils/mod.rs
// version: 1.0.0
// guid: d28f61b4-3a05-4e97-8c52-07b9e41d6f83

//! Utility functions

pub mod system;
