//! dayfill: aggregate markdown checkbox tasks into a daily note.
//!
//! Documents are split into header-delimited sections, their checkbox items are collected and
//! grouped by tag, and three sections of the target note (`complete`, `incomplete` and
//! `task_index`) are rewritten in place. Running it again over its own output is a no-op when
//! nothing upstream changed.
#![allow(clippy::multiple_crate_versions)]

pub mod checkbox;
pub mod config;
pub mod edit_plan;
pub mod error;
pub mod formats;
pub mod grouping;
pub mod line;
pub mod link_date;
pub mod metadata;
pub mod ordered;
pub mod pipeline;
pub mod rewrite;
pub mod section;
pub mod store;
pub mod surface;

pub use error::{Error, Result};
