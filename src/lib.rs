//! # Tweet Classifier
//!
//! Fine-tunes a pretrained BERT model with Burn to classify tweets by cyberbullying type.
#![forbid(unsafe_code)]

/// Models
pub mod models;

/// Pipelines
pub mod pipelines;

/// Datasets
pub mod datasets;

/// Utilities
pub mod utils;

/// Errors
pub mod error;

pub use error::{Error, Result};

/// Error macros
#[macro_use]
extern crate anyhow;
