//! Core data types shared by the engine, the CLI and the bindings.

pub mod analysis;
