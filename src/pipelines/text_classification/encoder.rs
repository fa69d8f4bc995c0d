use tokenizers::{Tokenizer, TruncationParams};

use crate::{Error, Result};

/// Token ids and attention masks for a batch of texts, padded to a common length
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedBatch {
    /// Token ids as a `[rows, seq_length]` array
    pub token_ids: Vec<Vec<usize>>,

    /// 1 for real tokens and 0 for padding, `[rows, seq_length]`
    pub attention_mask: Vec<Vec<usize>>,

    /// The shared sequence length of every row
    pub seq_length: usize,
}

impl EncodedBatch {
    /// Check that there is one mask per row and that every row and mask is `seq_length` wide
    pub fn validate(&self) -> Result<()> {
        if self.attention_mask.len() != self.token_ids.len() {
            return Err(Error::MaskMismatch {
                rows: self.token_ids.len(),
                masks: self.attention_mask.len(),
            });
        }

        let rows = self.token_ids.iter().zip(self.attention_mask.iter());

        for (row, (token_ids, mask)) in rows.enumerate() {
            let found = if token_ids.len() != self.seq_length {
                token_ids.len()
            } else {
                mask.len()
            };

            if found != self.seq_length {
                return Err(Error::RaggedRow {
                    row,
                    expected: self.seq_length,
                    found,
                });
            }
        }

        Ok(())
    }

    /// Number of encoded rows
    pub fn len(&self) -> usize {
        self.token_ids.len()
    }

    /// Whether the batch has no rows
    pub fn is_empty(&self) -> bool {
        self.token_ids.is_empty()
    }
}

/// Wraps a pretrained tokenizer with the padding and truncation policy used for both training
/// and inference
#[derive(Clone)]
pub struct Encoder {
    /// Tokenizer for converting text to token IDs
    tokenizer: Tokenizer,

    /// ID of the padding token
    pad_token_id: usize,

    /// Maximum sequence length for tokenized text
    max_seq_length: usize,
}

impl Encoder {
    /// Creates a new encoder. The tokenizer truncates content tokens so that the special tokens
    /// added by its post-processor always fit within `max_seq_length`.
    pub fn new(
        mut tokenizer: Tokenizer,
        pad_token_id: usize,
        max_seq_length: usize,
    ) -> Result<Self> {
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: max_seq_length,
                ..Default::default()
            }))
            .map_err(|e| Error::Encoding(e.to_string()))?;

        Ok(Self {
            tokenizer,
            pad_token_id,
            max_seq_length,
        })
    }

    /// Maximum sequence length for tokenized text
    pub fn max_seq_length(&self) -> usize {
        self.max_seq_length
    }

    /// Tokenize the texts, truncate each to the max sequence length and pad every row to the
    /// longest one
    pub fn encode<S: AsRef<str>>(&self, texts: &[S]) -> Result<EncodedBatch> {
        let mut token_ids_list = Vec::with_capacity(texts.len());

        for text in texts {
            let encoding = self
                .tokenizer
                .encode(text.as_ref(), true)
                .map_err(|e| Error::Encoding(e.to_string()))?;

            let token_ids: Vec<usize> = encoding.get_ids().iter().map(|t| *t as usize).collect();

            token_ids_list.push(token_ids);
        }

        let seq_length = token_ids_list.iter().map(Vec::len).max().unwrap_or(0);

        if seq_length == 0 && !token_ids_list.is_empty() {
            return Err(Error::Encoding(
                "every input encoded to an empty token sequence".to_string(),
            ));
        }

        let mut attention_mask = Vec::with_capacity(token_ids_list.len());

        for token_ids in token_ids_list.iter_mut() {
            let n_tokens = token_ids.len();

            let mut mask = vec![1; n_tokens];
            mask.resize(seq_length, 0);
            attention_mask.push(mask);

            token_ids.resize(seq_length, self.pad_token_id);
        }

        log::debug!(
            "Encoded {} texts to sequences of length {}",
            token_ids_list.len(),
            seq_length
        );

        Ok(EncodedBatch {
            token_ids: token_ids_list,
            attention_mask,
            seq_length,
        })
    }
}
