//! Adapt Bert for Sequence Classification to the Text Classification pipeline

use std::{collections::BTreeMap, path::PathBuf};

use bert_burn::model::BertModelConfig;
use burn::{config::Config as _, nn::LinearConfig, tensor::backend::Backend};

use crate::pipelines::text_classification;

use super::Model;

/// The Model Configuration
#[derive(burn::config::Config)]
pub struct Config {
    /// The base BERT config
    pub model: BertModelConfig,

    /// A map from class ids to class name labels
    pub id2label: BTreeMap<usize, String>,
}

impl Config {
    /// Build a configuration from a base BERT config and the ordered class labels
    pub fn new_with_labels(model: BertModelConfig, labels: &[String]) -> Self {
        let id2label = labels
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.trim().to_string()))
            .collect();

        Config::new(model, id2label)
    }

    /// Total number of classes
    pub fn n_classes(&self) -> usize {
        self.id2label.len()
    }

    /// Initializes a Bert model with default weights
    pub fn init<B: Backend>(&self, device: &B::Device) -> Model<B> {
        let model = self.model.init(device);

        let output = LinearConfig::new(self.model.hidden_size, self.n_classes()).init(device);

        Model {
            model,
            output,
            n_classes: self.n_classes(),
        }
    }
}

impl text_classification::ModelConfig for Config {
    /// Load a pretrained model configuration
    fn load_pretrained(
        config_file: PathBuf,
        id2label: BTreeMap<usize, String>,
    ) -> anyhow::Result<Self> {
        let mut bert_config = BertModelConfig::load(&config_file)
            .map_err(|e| anyhow!("Unable to load Hugging Face Config file: {}", e))?;

        // Enable the pooling layer for sequence classification
        bert_config.with_pooling_layer = Some(true);

        let model_config = Config::new(bert_config, id2label);

        if model_config.n_classes() == 0 {
            return Err(anyhow!(
                "Classes are not defined in the model configuration"
            ));
        }

        Ok(model_config)
    }

    fn pad_token_id(&self) -> usize {
        self.model.pad_token_id
    }

    fn max_position_embeddings(&self) -> usize {
        self.model.max_position_embeddings
    }

    fn id2label(&self) -> &BTreeMap<usize, String> {
        &self.id2label
    }
}
