use std::path::PathBuf;

use hf_hub::api::tokio;

use crate::{Error, Result};

/// Download model config and weights from Hugging Face Hub
/// If file exists in cache, it will not be downloaded again
pub async fn download_hf_model(model_name: &str) -> Result<(PathBuf, PathBuf)> {
    let api = tokio::Api::new().map_err(|e| Error::ModelExecution(e.to_string()))?;
    let repo = api.model(model_name.to_string());

    let model_filepath = repo.get("model.safetensors").await.map_err(|e| {
        Error::ModelExecution(format!(
            "Failed to download: {} weights with name: model.safetensors from HuggingFace Hub: {}",
            model_name, e
        ))
    })?;

    let config_filepath = repo.get("config.json").await.map_err(|e| {
        Error::ModelExecution(format!(
            "Failed to download: {} config with name: config.json from HuggingFace Hub: {}",
            model_name, e
        ))
    })?;

    log::debug!(
        "Using {} weights from {}",
        model_name,
        model_filepath.display()
    );

    Ok((config_filepath, model_filepath))
}
