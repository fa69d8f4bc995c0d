use burn::data::dataset::Dataset;

use crate::{Error, Result};

use super::{EncodedBatch, Encoder, Item, LabelEncoder};

/// One encoded row and its class id
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Token ids for the row
    pub token_ids: Vec<usize>,

    /// Attention mask for the row, 1 for real tokens and 0 for padding
    pub attention_mask: Vec<usize>,

    /// The class id
    pub label: usize,
}

/// Encoded inputs paired with their class ids
#[derive(Clone, Debug)]
pub struct ClassificationDataset {
    encoded: EncodedBatch,
    labels: Vec<usize>,
}

impl ClassificationDataset {
    /// Pair encoded rows with labels. Both must have the same length, and every row must be
    /// padded to the shared sequence length.
    pub fn new(encoded: EncodedBatch, labels: Vec<usize>) -> Result<Self> {
        encoded.validate()?;

        if encoded.len() != labels.len() {
            return Err(Error::ShapeMismatch {
                rows: encoded.len(),
                labels: labels.len(),
            });
        }

        Ok(Self { encoded, labels })
    }

    /// Encode the texts of the items and pair them with their encoded class labels
    pub fn from_items<I: Item>(
        items: &[I],
        encoder: &Encoder,
        labels: &LabelEncoder,
    ) -> Result<Self> {
        let texts: Vec<&str> = items.iter().map(Item::input).collect();

        let targets = items
            .iter()
            .map(|item| item.class_id(labels))
            .collect::<Result<Vec<_>>>()?;

        Self::new(encoder.encode(&texts)?, targets)
    }

    /// The sample at `index`, or an index error when it is out of range
    pub fn sample(&self, index: usize) -> Result<Sample> {
        self.get(index).ok_or(Error::Index {
            index,
            len: self.len(),
        })
    }

    /// The shared sequence length of every sample
    pub fn seq_length(&self) -> usize {
        self.encoded.seq_length
    }
}

impl Dataset<Sample> for ClassificationDataset {
    fn get(&self, index: usize) -> Option<Sample> {
        let label = *self.labels.get(index)?;

        Some(Sample {
            token_ids: self.encoded.token_ids[index].clone(),
            attention_mask: self.encoded.attention_mask[index].clone(),
            label,
        })
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}
