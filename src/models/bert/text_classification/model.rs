use std::path::PathBuf;

use bert_burn::{
    data::BertInferenceBatch,
    model::{BertModel, BertModelOutput},
};
use burn::{
    module::Module,
    nn::{loss::CrossEntropyLossConfig, Linear},
    tensor::{backend::Backend, Int, Tensor},
    train::ClassificationOutput,
};
use derive_new::new;

use crate::pipelines::text_classification::{
    self,
    batcher::{Infer, Train},
};

use super::Config;

/// BERT for text Classification
#[derive(Module, Debug, new)]
pub struct Model<B: Backend> {
    /// The base BERT model
    pub model: BertModel<B>,

    /// Linear layer for text classification
    pub output: Linear<B>,

    /// Total number of classes
    pub n_classes: usize,
}

/// Define model behavior
impl<B: Backend> Model<B> {
    /// Classification logits from the pooled [CLS] representation: [batch_size, n_classes]
    fn logits(&self, input: Infer<B>) -> Tensor<B, 2> {
        let [batch_size, _seq_length] = input.tokens.dims();

        let BertModelOutput {
            pooled_output,
            hidden_states,
        } = self.model.forward(BertInferenceBatch {
            tokens: input.tokens,
            mask_pad: input.mask_pad,
        });

        self.output
            .forward(pooled_output.unwrap_or(hidden_states))
            .slice([0..batch_size, 0..1])
            .reshape([batch_size, self.n_classes])
    }

    /// Defines forward pass for training
    pub fn forward(&self, input: Infer<B>, targets: Tensor<B, 1, Int>) -> ClassificationOutput<B> {
        let output = self.logits(input);
        let targets = targets.to_device(&output.device());

        let loss = CrossEntropyLossConfig::new()
            .init(&output.device())
            .forward(output.clone(), targets.clone());

        ClassificationOutput {
            loss,
            output,
            targets,
        }
    }
}

impl<B: Backend> text_classification::Model<B> for Model<B> {
    fn forward(&self, item: Train<B>) -> ClassificationOutput<B> {
        self.forward(item.input, item.targets)
    }

    fn infer(&self, input: Infer<B>) -> Tensor<B, 2> {
        self.logits(input)
    }
}

impl<B: Backend> text_classification::PretrainedModel<B> for Model<B> {
    type Config = Config;

    fn load_from_safetensors(
        device: &B::Device,
        model_file: PathBuf,
        config: Self::Config,
    ) -> anyhow::Result<Self> {
        let n_classes = config.n_classes();
        if n_classes == 0 {
            return Err(anyhow!(
                "Classes are not defined in the model configuration"
            ));
        }

        // Pretrained encoder weights, with the freshly initialized linear output from `init`
        let mut model = config.init(device);
        model.model = model.model.load_record(BertModel::from_safetensors(
            model_file,
            device,
            config.model.clone(),
        ));

        Ok(model)
    }
}
