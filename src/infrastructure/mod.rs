// src/infrastructure/mod.rs
pub mod config;
pub mod renderer;
pub mod snapshot;

pub use config::Config;
pub use renderer::PreviewWriter;
pub use snapshot::JsonSnapshot;
