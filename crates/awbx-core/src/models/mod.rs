//! Data models for report output.

pub mod report;
