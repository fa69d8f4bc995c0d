use burn::tensor::backend::Backend;

use crate::{utils::tensors::to_class_ids, Error, Result};

use super::{Batcher, Encoder, LabelEncoder, Model};

/// Predict the label of a single text.
///
/// Uses the same encoder and label encoder as training so the input sees the same truncation
/// and padding policy and the predicted id decodes to the same label set.
pub fn predict<B, M>(
    model: &M,
    encoder: &Encoder,
    batcher: &Batcher<B>,
    labels: &LabelEncoder,
    text: &str,
) -> Result<String>
where
    B: Backend,
    M: Model<B>,
{
    let encoded = encoder.encode(&[text])?;
    let logits = model.infer(batcher.infer(&encoded));

    let class_id = to_class_ids(logits.argmax(1))
        .first()
        .copied()
        .ok_or_else(|| Error::ModelExecution("the model returned no prediction".to_string()))?;

    Ok(labels.decode(class_id)?.to_string())
}
