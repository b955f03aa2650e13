//! Spangrid - span-aware grid editing engine
//!
//! This crate provides the core types and logic for editing spreadsheet-like
//! table blocks embedded in text documents, implementing the Elm Architecture
//! pattern. The document format, parsing, serialization, and actual rendering
//! live behind the [`host::TableCodec`] and [`host::HostDocument`] traits;
//! the engine owns the grid model, span normalization, structural mutations,
//! merge/split, drag selection, and the commit session that writes edits
//! back into the host document.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod grid;
pub mod host;
pub mod messages;
pub mod model;
pub mod render;
pub mod selection;
pub mod session;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EngineConfig;
pub use messages::Msg;
pub use model::EngineModel;
pub use render::{render_store, RenderPlan};
pub use update::update;
