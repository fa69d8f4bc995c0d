/// BERT for Text Classification (such as cyberbullying type detection)
pub mod text_classification;

/// bert-base-uncased
pub const BERT_BASE_UNCASED: &str = "bert-base-uncased";

/// bert-base-cased
pub const BERT_BASE_CASED: &str = "bert-base-cased";

/// Available models to use with Bert for Text Classification
pub static TEXT_CLASSIFICATION_MODELS: &[&str; 2] = &[BERT_BASE_UNCASED, BERT_BASE_CASED];
