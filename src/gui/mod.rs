// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod progress;

pub use app::{run, show_table};
