//! ReDoS analysis and auto-fix engine.
//!
//! Components, leaf first:
//! - [`syntax`]: tolerant tokenizer shared by every component
//! - [`rules`]: ordered vulnerability rule table
//! - [`score`]: complexity score, class and performance tier
//! - [`compat`]: per-engine compatibility probing
//! - [`capacity`]: capacity-unit estimate
//! - [`recommend`]: advisory text tables
//! - [`autofix`]: deterministic pattern rewriting
//! - [`bench`]: latency benchmark harness
//! - [`api`]: the [`Engine`] orchestrator

pub mod api;
pub mod autofix;
pub mod bench;
pub mod capacity;
pub mod compat;
pub mod config;
pub mod recommend;
pub mod rules;
pub mod score;
pub mod syntax;

pub use api::{analyze, analyze_batch, benchmark, fix, Engine};
pub use config::EngineConfig;
