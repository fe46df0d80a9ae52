// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod data;
pub mod error;
pub mod file;
#[cfg(feature = "gui")]
pub mod gui;
pub mod progress;
pub mod runner;
pub mod scrape;

#[doc(hidden)]
pub use tracing as __tracing;
