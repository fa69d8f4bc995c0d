use burn::{
    data::dataloader::DataLoader,
    module::AutodiffModule,
    optim::{GradientsParams, Optimizer},
    tensor::{backend::AutodiffBackend, ElementConversion},
    LearningRate,
};

use super::{batcher::Train, Model};

/// Define configuration struct for the experiment
#[derive(burn::config::Config)]
pub struct Config {
    /// Maximum sequence length
    #[config(default = 512)]
    pub max_seq_length: usize,

    /// Batch size
    #[config(default = 8)]
    pub batch_size: usize,

    /// Number of epochs
    #[config(default = 3)]
    pub num_epochs: usize,

    /// Adam epsilon
    #[config(default = 1e-8)]
    pub adam_epsilon: f32,

    /// AdamW weight decay
    #[config(default = 0.01)]
    pub weight_decay: f32,

    /// Learning rate
    #[config(default = 2e-5)]
    pub learning_rate: LearningRate,

    /// Fraction of the sampled records held out for evaluation
    #[config(default = 0.2)]
    pub test_fraction: f64,

    /// Number of records drawn from the corpus
    #[config(default = 1000)]
    pub sample_size: usize,

    /// Seed for sampling, splitting and shuffling
    #[config(default = 42)]
    pub seed: u64,

    /// Whether the training batches are reshuffled every epoch
    #[config(default = true)]
    pub shuffle: bool,

    /// Model name (e.g., "bert-base-uncased")
    #[config(default = "\"bert-base-uncased\".to_string()")]
    pub model_name: String,
}

/// Where the training loop is in its run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Not started
    #[default]
    Idle,

    /// Between steps of an epoch
    EpochRunning,

    /// Inside a forward/backward/update step
    StepRunning,

    /// Every epoch has completed
    Done,
}

/// Mutable state owned by the training loop for the duration of a single run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrainState {
    /// The current phase
    pub phase: Phase,

    /// The current epoch, starting from 1 (0 before the first epoch)
    pub epoch: usize,

    /// Sum of the step losses of the current epoch
    pub total_loss: f64,

    /// Number of steps taken in the current epoch
    pub epoch_steps: usize,

    /// The loss of every step, in order
    pub losses: Vec<f64>,
}

impl TrainState {
    fn begin_epoch(&mut self, epoch: usize) {
        self.phase = Phase::EpochRunning;
        self.epoch = epoch;
        self.total_loss = 0.0;
        self.epoch_steps = 0;
    }

    fn begin_step(&mut self) {
        self.phase = Phase::StepRunning;
    }

    fn end_step(&mut self, loss: f64) {
        self.total_loss += loss;
        self.epoch_steps += 1;
        self.losses.push(loss);
        self.phase = Phase::EpochRunning;
    }

    fn finish(&mut self) {
        self.phase = Phase::Done;
    }

    /// Mean step loss of the current epoch
    pub fn mean_epoch_loss(&self) -> Option<f64> {
        (self.epoch_steps > 0).then(|| self.total_loss / self.epoch_steps as f64)
    }
}

/// Fine-tune the model for `num_epochs` passes over the loader.
///
/// Every batch runs a forward pass, backpropagates the loss and applies one optimizer step. A
/// failure inside the model or optimizer aborts the run.
pub fn train<B, M, O>(
    mut model: M,
    optimizer: &mut O,
    loader: &dyn DataLoader<Train<B>>,
    num_epochs: usize,
    learning_rate: LearningRate,
) -> (M, TrainState)
where
    B: AutodiffBackend,
    M: Model<B> + AutodiffModule<B>,
    O: Optimizer<M, B>,
{
    let mut state = TrainState::default();

    for epoch in 1..=num_epochs {
        state.begin_epoch(epoch);

        for batch in loader.iter() {
            state.begin_step();

            let output = model.forward(batch);
            let loss = output.loss.clone().into_scalar().elem::<f64>();

            let grads = output.loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optimizer.step(learning_rate, model, grads);

            state.end_step(loss);

            println!("Epoch {epoch}/{num_epochs}, Loss: {loss:.4}");
        }

        if let Some(mean) = state.mean_epoch_loss() {
            log::info!(
                "Epoch {}/{} finished after {} steps, mean loss {:.4}",
                epoch,
                num_epochs,
                state.epoch_steps,
                mean
            );
        }
    }

    state.finish();

    (model, state)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn config_defaults_match_the_run_parameters() {
        let config = Config::new();

        assert_eq!(config.num_epochs, 3);
        assert_eq!(config.batch_size, 8);
        assert_eq!(config.max_seq_length, 512);
        assert_eq!(config.sample_size, 1000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.model_name, "bert-base-uncased");
        assert!((config.learning_rate - 2e-5).abs() < 1e-12);
        assert!((config.test_fraction - 0.2).abs() < 1e-12);
    }

    #[test]
    fn state_tracks_steps_and_epochs() {
        let mut state = TrainState::default();
        assert_eq!(state.phase, Phase::Idle);

        state.begin_epoch(1);
        state.begin_step();
        assert_eq!(state.phase, Phase::StepRunning);
        state.end_step(2.0);
        state.begin_step();
        state.end_step(1.0);
        assert_eq!(state.mean_epoch_loss(), Some(1.5));

        state.begin_epoch(2);
        assert_eq!(state.mean_epoch_loss(), None);
        state.finish();

        assert_eq!(state.phase, Phase::Done);
        assert_eq!(state.losses, vec![2.0, 1.0]);
    }
}
