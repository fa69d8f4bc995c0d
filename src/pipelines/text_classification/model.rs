use std::{collections::BTreeMap, path::PathBuf};

use burn::{
    module::Module,
    tensor::{backend::Backend, Tensor},
    train::ClassificationOutput,
};

use super::batcher::{Infer, Train};

/// A trait for models that can be used for Text Classification.
///
/// Generic over a plain [`Backend`] so the same model can be trained on an autodiff backend and
/// evaluated on its inner backend after calling `valid()`.
pub trait Model<B: Backend>: Module<B> {
    /// Perform a forward pass, returning the logits and the cross-entropy loss
    fn forward(&self, item: Train<B>) -> ClassificationOutput<B>;

    /// Defines forward pass for inference, returning raw logits: [batch_size, n_classes]
    fn infer(&self, input: Infer<B>) -> Tensor<B, 2>;
}

/// A Text Classification model that starts from pretrained weights
pub trait PretrainedModel<B: Backend>: Model<B> + Sized {
    /// The model configuration
    type Config: ModelConfig;

    /// Load the pretrained weights from a file, adding a freshly initialized classification head
    fn load_from_safetensors(
        device: &B::Device,
        model_file: PathBuf,
        config: Self::Config,
    ) -> anyhow::Result<Self>;
}

/// A trait for configs that can be used for Text Classification models
pub trait ModelConfig: burn::config::Config + Clone {
    /// Load a pretrained model configuration, attaching the class labels for the task
    fn load_pretrained(
        config_file: PathBuf,
        id2label: BTreeMap<usize, String>,
    ) -> anyhow::Result<Self>;

    /// The padding token ID
    fn pad_token_id(&self) -> usize;

    /// The max position embeddings
    fn max_position_embeddings(&self) -> usize;

    /// A mapping from class ids to class name labels
    fn id2label(&self) -> &BTreeMap<usize, String>;
}
