use std::path::Path;

use burn::{
    module::AutodiffModule, optim::AdamWConfig, tensor::backend::AutodiffBackend,
};
use tokenizers::Tokenizer;

use crate::{datasets::cyberbullying, utils::hugging_face::download_hf_model};

use super::{
    batcher, evaluate, predict, split, train, Batcher, ClassificationDataset, Config, Encoder,
    Item as _, LabelEncoder, MetricsReport, Model, ModelConfig as _, PretrainedModel,
};

/// The text classified after training to demonstrate single-example inference
pub static DEMO_TEXT: &str = "A whale is the biggest animal on the planet";

/// The outcome of a fine-tuning run
#[derive(Clone, Debug)]
pub struct Report {
    /// The loss of every training step, in order
    pub losses: Vec<f64>,

    /// Metrics over the test split
    pub metrics: MetricsReport,

    /// The label predicted for [`DEMO_TEXT`]
    pub prediction: String,
}

/// Fine-tune a pretrained model on the cyberbullying corpus, evaluate it on the held out split
/// and classify the demo text
pub async fn run<B, M>(
    device: B::Device,   // Device on which to perform computation (e.g., CPU or CUDA device)
    config: Config,      // Experiment configuration
    data_file: &Path,    // CSV corpus with tweet_text and cyberbullying_type columns
) -> anyhow::Result<Report>
where
    B: AutodiffBackend,
    M: PretrainedModel<B> + AutodiffModule<B>,
    M::InnerModule: Model<B::InnerBackend>,
{
    log::info!(
        "Running the {} pipeline on the {} dataset with {}",
        super::PIPELINE,
        cyberbullying::DATASET,
        config.model_name
    );

    let corpus = cyberbullying::Dataset::load(data_file)?;
    let records = corpus.sample(config.sample_size, config.seed);

    let labels = LabelEncoder::fit(records.iter().map(|record| record.class_label()))?;
    log::info!("Found {} classes: {:?}", labels.len(), labels.classes());

    let (train_records, test_records) = split(records, config.test_fraction, config.seed)?;

    let (config_file, model_file) = download_hf_model(&config.model_name).await?;

    let model_config = M::Config::load_pretrained(config_file, labels.id2label())
        .map_err(|e| anyhow!("Unable to load pre-trained model config file: {}", e))?;

    log::info!("Classification head labels: {:?}", model_config.id2label());

    let model = M::load_from_safetensors(&device, model_file, model_config.clone())?;

    // Initialize tokenizer
    let tokenizer = Tokenizer::from_pretrained(&config.model_name, None)
        .map_err(|e| anyhow!("Unable to load the {} tokenizer: {}", config.model_name, e))?;

    let encoder = Encoder::new(
        tokenizer,
        model_config.pad_token_id(),
        config
            .max_seq_length
            .min(model_config.max_position_embeddings()),
    )?;

    let dataset_train = ClassificationDataset::from_items(&train_records, &encoder, &labels)?;
    let dataset_test = ClassificationDataset::from_items(&test_records, &encoder, &labels)?;

    // Initialize data loaders for training and testing data
    let dataloader_train = batcher::loader::<B>(
        dataset_train,
        config.batch_size,
        config.shuffle.then_some(config.seed),
        device.clone(),
    );
    let dataloader_test = batcher::loader::<B::InnerBackend>(
        dataset_test,
        config.batch_size,
        None,
        device.clone(),
    );

    // Initialize optimizer
    let mut optimizer = AdamWConfig::new()
        .with_epsilon(config.adam_epsilon)
        .with_weight_decay(config.weight_decay)
        .init::<B, M>();

    log::info!("Training for {} epochs", config.num_epochs);

    let (model, state) = train(
        model,
        &mut optimizer,
        dataloader_train.as_ref(),
        config.num_epochs,
        config.learning_rate,
    );

    let model = model.valid();

    let metrics = evaluate(&model, dataloader_test.as_ref(), labels.len());
    println!("{metrics}");

    let batcher = Batcher::<B::InnerBackend>::new(device);
    let prediction = predict(&model, &encoder, &batcher, &labels, DEMO_TEXT)?;
    println!("{prediction}");

    Ok(Report {
        losses: state.losses,
        metrics,
        prediction,
    })
}
