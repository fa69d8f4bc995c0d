/// The unique string token that identifies this pipeline
pub static PIPELINE: &str = "text-classification";

/// Label encoding
pub mod labels;

/// Train/test splitting
pub mod split;

/// Tokenization into fixed-shape arrays
pub mod encoder;

/// Encoded samples paired with their labels
pub mod dataset;

/// Batcher and data loaders
pub mod batcher;

/// Common model config and traits for text classification
pub mod model;

/// Text Classification Items
pub mod item;

/// Training
pub mod training;

/// Evaluation metrics
pub mod metrics;

/// Evaluation
pub mod evaluation;

/// Inference
pub mod inference;

/// End-to-end fine-tuning run
pub mod pipeline;

pub use batcher::Batcher;
pub use dataset::{ClassificationDataset, Sample};
pub use encoder::{EncodedBatch, Encoder};
pub use evaluation::evaluate;
pub use inference::predict;
pub use item::Item;
pub use labels::LabelEncoder;
pub use metrics::MetricsReport;
pub use model::{Model, ModelConfig, PretrainedModel};
pub use split::split;
pub use training::{train, Config, TrainState};
