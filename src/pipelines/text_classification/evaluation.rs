use burn::{data::dataloader::DataLoader, tensor::backend::Backend};

use crate::utils::tensors::to_class_ids;

use super::{batcher::Train, MetricsReport, Model};

/// Run the model over every test batch once and score its arg-max predictions.
///
/// Call with `model.valid()` so no autodiff graph is recorded and dropout is disabled.
pub fn evaluate<B, M>(
    model: &M,
    loader: &dyn DataLoader<Train<B>>,
    n_classes: usize,
) -> MetricsReport
where
    B: Backend,
    M: Model<B>,
{
    let mut y_pred = Vec::new();
    let mut y_true = Vec::new();

    for batch in loader.iter() {
        let logits = model.infer(batch.input);

        y_pred.extend(to_class_ids(logits.argmax(1)));
        y_true.extend(to_class_ids(batch.targets));
    }

    log::info!("Evaluated {} test samples", y_true.len());

    MetricsReport::from_predictions(&y_true, &y_pred, n_classes)
}
