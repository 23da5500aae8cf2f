//! Platform-agnostic explorer logic: dataset, selection, matching, formatting.

pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod matcher;
pub mod report;
pub mod selection;
pub mod session;
pub mod source;
