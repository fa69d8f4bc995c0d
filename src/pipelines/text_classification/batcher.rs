use std::sync::Arc;

use burn::{
    data::dataloader::{self, DataLoader, DataLoaderBuilder},
    tensor::{backend::Backend, Bool, Int, Tensor},
};
use derive_new::new;

use crate::utils::tensors::{class_ids, stack_rows};

use super::{ClassificationDataset, EncodedBatch, Sample};

/// An inference batch for text classification
#[derive(Debug, Clone, new)]
pub struct Infer<B: Backend> {
    /// Tokenized text as 2D tensor: [batch_size, max_seq_length]
    pub tokens: Tensor<B, 2, Int>,

    /// Padding mask for the tokenized text containing booleans for padding locations
    pub mask_pad: Tensor<B, 2, Bool>,
}

/// A training batch for text classification
#[derive(Clone, Debug, new)]
pub struct Train<B: Backend> {
    /// Model input
    pub input: Infer<B>,

    /// Class ids for the batch
    pub targets: Tensor<B, 1, Int>,
}

/// Turns encoded samples into tensors on a specific device
#[derive(Clone, new)]
pub struct Batcher<B: Backend> {
    /// Device on which to perform computation (e.g., CPU or CUDA device)
    pub device: B::Device,
}

impl<B: Backend> Batcher<B> {
    /// Build an inference batch from every row of an encoded batch
    pub fn infer(&self, encoded: &EncodedBatch) -> Infer<B> {
        self.input(
            &encoded.token_ids,
            &encoded.attention_mask,
            encoded.seq_length,
        )
    }

    fn input<'a, I>(&self, token_ids: I, attention_mask: I, seq_length: usize) -> Infer<B>
    where
        I: IntoIterator<Item = &'a Vec<usize>>,
    {
        let tokens = stack_rows::<B, _>(token_ids, seq_length, &self.device);

        // The attention mask marks real tokens with 1, the model wants `true` on padding
        let mask_pad = stack_rows::<B, _>(attention_mask, seq_length, &self.device).equal_elem(0);

        Infer { tokens, mask_pad }
    }
}

/// Implement Batcher trait for Batcher struct for training
impl<B: Backend> dataloader::batcher::Batcher<Sample, Train<B>> for Batcher<B> {
    /// Collects a vector of encoded samples into a training batch
    fn batch(&self, items: Vec<Sample>) -> Train<B> {
        let seq_length = items.first().map_or(0, |item| item.token_ids.len());

        let input = self.input(
            items.iter().map(|item| &item.token_ids).collect::<Vec<_>>(),
            items.iter().map(|item| &item.attention_mask).collect::<Vec<_>>(),
            seq_length,
        );

        let labels: Vec<usize> = items.iter().map(|item| item.label).collect();
        let targets = class_ids(&labels, &self.device);

        Train { input, targets }
    }
}

/// Build a single-threaded data loader over the dataset.
///
/// Every pass covers each sample exactly once. With `shuffle` set to a seed, the sample order
/// is re-randomized at the start of every pass.
pub fn loader<B: Backend>(
    dataset: ClassificationDataset,
    batch_size: usize,
    shuffle: Option<u64>,
    device: B::Device,
) -> Arc<dyn DataLoader<Train<B>>> {
    let builder = DataLoaderBuilder::new(Batcher::<B>::new(device)).batch_size(batch_size);

    let builder = match shuffle {
        Some(seed) => builder.shuffle(seed),
        None => builder,
    };

    builder.build(dataset)
}
