// file: src/cli/mod.rs
// version: 1.0.0
// guid: e1f72a58-4c09-4db6-9137-5ab8e60c24fd

//! Command line interface

pub mod args;
pub mod commands;
