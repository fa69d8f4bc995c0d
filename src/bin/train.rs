//! Command line tool to fine-tune BERT on the cyberbullying tweets corpus

use std::path::PathBuf;

use anyhow::anyhow;
use pico_args::Arguments;
use tweet_classifier::{
    datasets::cyberbullying,
    models::bert,
    pipelines::text_classification::{self, pipeline},
};

#[cfg(feature = "tch-gpu")]
mod backend {
    use burn::backend::{libtorch::LibTorchDevice, Autodiff, LibTorch};

    pub type Backend = Autodiff<LibTorch>;

    pub fn device() -> LibTorchDevice {
        LibTorchDevice::Cuda(0)
    }
}

#[cfg(not(feature = "tch-gpu"))]
mod backend {
    use burn::backend::{ndarray::NdArrayDevice, Autodiff, NdArray};

    pub type Backend = Autodiff<NdArray>;

    pub fn device() -> NdArrayDevice {
        NdArrayDevice::Cpu
    }
}

const HELP: &str = "\
Usage: train [OPTIONS] [DATA_FILE]

Arguments:
  DATA_FILE            CSV file with tweet_text and cyberbullying_type columns
                       (defaults to 'cyberbullying_tweets.csv')

Options:
  -m, --model NAME     Pretrained model to fine-tune: bert-base-uncased (default) or
                       bert-base-cased
  -h, --help           Print help
";

#[derive(Debug)]
struct Args {
    model: String,
    data_file: PathBuf,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        Self::from_args(Arguments::from_env())
    }

    fn from_args(mut pargs: Arguments) -> anyhow::Result<Option<Self>> {
        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let model: String = pargs
            .opt_value_from_str(["-m", "--model"])?
            .unwrap_or_else(|| bert::BERT_BASE_UNCASED.to_string());

        if !bert::TEXT_CLASSIFICATION_MODELS.contains(&model.as_str()) {
            return Err(anyhow!("Unsupported model: {}", model));
        }

        let args = Args {
            model,
            data_file: pargs
                .opt_free_from_str()?
                .unwrap_or_else(|| PathBuf::from(cyberbullying::DEFAULT_FILE)),
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            return Err(anyhow!("Unexpected arguments: {:?}", remaining));
        }

        Ok(Some(args))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let Some(args) = Args::parse()? else {
        print!("{}", HELP);

        return Ok(());
    };

    let config = text_classification::Config::new().with_model_name(args.model);

    pipeline::run::<backend::Backend, bert::text_classification::Model<backend::Backend>>(
        backend::device(),
        config,
        &args.data_file,
    )
    .await?;

    Ok(())
}
