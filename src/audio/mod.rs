// file: src/audio/mod.rs
// version: 1.0.0
// guid: 6d3b5f18-2a97-4c40-b8e6-94f027c15d3a

//! Audio processing and playback orchestration

pub mod player;
pub mod transform;
pub mod ui;
