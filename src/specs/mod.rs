// src/specs/mod.rs
//! # Page “specs”
//!
//! Each spec knows where the ground truth lives in one kind of page and how to
//! read it. Nothing here touches the network or the filesystem: input is an
//! HTML string, output is a small bundle (headers + rows + links) or a string.
//!
//! ## Current specs
//! - `catalog` – the degree programme's course table: headers, rows and the
//!   course-page links found inside row cells.
//! - `exam` – a course page's "exam modality" section.
//!
//! ## Conventions
//! - Structural positions (table path, list column, section labels) come in
//!   through `config::options::PageLayout`, never as inline literals.
//! - A missing structure degrades to an empty result plus one log line.
//! - Specs are testable offline against inline fixtures.
pub mod catalog;
pub mod exam;
