//! Type definitions shared by the configuration and plugin layers
//!
//! This module contains the dataset identifiers and the record type hooks operate on.

pub mod dataset;
pub mod record;

pub use dataset::{Dataset, ImportStage};
pub use record::Record;
