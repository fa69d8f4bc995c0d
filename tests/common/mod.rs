#![allow(dead_code)]

use std::str::FromStr;

use burn::{
    backend::{ndarray::NdArrayDevice, Autodiff, NdArray},
    module::Module,
    nn::{loss::CrossEntropyLossConfig, Embedding, EmbeddingConfig, Linear, LinearConfig},
    tensor::{backend::Backend, Tensor},
    train::ClassificationOutput,
};
use tokenizers::Tokenizer;
use tweet_classifier::{
    datasets::cyberbullying::Item,
    pipelines::text_classification::{
        batcher::{Infer, Train},
        ClassificationDataset, Encoder, LabelEncoder, Model,
    },
};

pub type TestBackend = Autodiff<NdArray>;

pub const DEVICE: NdArrayDevice = NdArrayDevice::Cpu;

pub const EMBEDDING_SIZE: usize = 8;

/// Mean-pooled word embeddings followed by a linear classification head
#[derive(Module, Debug)]
pub struct TinyClassifier<B: Backend> {
    pub embedding: Embedding<B>,
    pub output: Linear<B>,
}

impl<B: Backend> TinyClassifier<B> {
    pub fn new(vocab_size: usize, n_classes: usize, device: &B::Device) -> Self {
        Self {
            embedding: EmbeddingConfig::new(vocab_size, EMBEDDING_SIZE).init(device),
            output: LinearConfig::new(EMBEDDING_SIZE, n_classes).init(device),
        }
    }

    fn logits(&self, input: Infer<B>) -> Tensor<B, 2> {
        let [batch_size, _seq_length] = input.tokens.dims();

        let pooled = self
            .embedding
            .forward(input.tokens)
            .mean_dim(1)
            .reshape([batch_size, EMBEDDING_SIZE]);

        self.output.forward(pooled)
    }
}

impl<B: Backend> Model<B> for TinyClassifier<B> {
    fn forward(&self, item: Train<B>) -> ClassificationOutput<B> {
        let output = self.logits(item.input);
        let targets = item.targets;

        let loss = CrossEntropyLossConfig::new()
            .init(&output.device())
            .forward(output.clone(), targets.clone());

        ClassificationOutput {
            loss,
            output,
            targets,
        }
    }

    fn infer(&self, input: Infer<B>) -> Tensor<B, 2> {
        self.logits(input)
    }
}

pub const VOCAB: [&str; 12] = [
    "[PAD]", "[UNK]", "a", "whale", "is", "the", "biggest", "animal", "on", "planet", "girls",
    "school",
];

/// A whitespace word-level tokenizer over [`VOCAB`]
pub fn tokenizer() -> Tokenizer {
    let vocab = VOCAB
        .iter()
        .enumerate()
        .map(|(id, word)| format!("\"{word}\": {id}"))
        .collect::<Vec<_>>()
        .join(", ");

    Tokenizer::from_str(&format!(
        r#"{{
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": [],
            "normalizer": {{ "type": "Lowercase" }},
            "pre_tokenizer": {{ "type": "Whitespace" }},
            "post_processor": null,
            "decoder": null,
            "model": {{ "type": "WordLevel", "vocab": {{ {vocab} }}, "unk_token": "[UNK]" }}
        }}"#
    ))
    .expect("valid tokenizer definition")
}

pub fn encoder() -> Encoder {
    Encoder::new(tokenizer(), 0, 16).expect("valid truncation")
}

pub fn items() -> Vec<Item> {
    [
        ("a whale is an animal", "nature"),
        ("the biggest animal on the planet", "nature"),
        ("the whale", "nature"),
        ("animal planet", "nature"),
        ("girls school", "gender"),
        ("the girls", "gender"),
        ("a school is on the planet", "gender"),
        ("girls girls school", "gender"),
        ("the biggest school", "gender"),
        ("a whale", "nature"),
    ]
    .into_iter()
    .map(|(text, label)| Item::new(text.to_string(), label.to_string()))
    .collect()
}

pub fn labels() -> LabelEncoder {
    LabelEncoder::fit(items().iter().map(|item| item.cyberbullying_type.clone()))
        .expect("labels are present")
}

pub fn dataset() -> ClassificationDataset {
    ClassificationDataset::from_items(&items(), &encoder(), &labels()).expect("items encode")
}

/// Every float parameter of the classifier, flattened
pub fn parameters<B: Backend>(model: &TinyClassifier<B>) -> Vec<f32> {
    let mut values: Vec<f32> = model
        .embedding
        .weight
        .val()
        .into_data()
        .convert::<f32>()
        .value;

    values.extend(model.output.weight.val().into_data().convert::<f32>().value);

    values
}
