use std::path::Path;

use burn::data::dataset::{self, Dataset as _, InMemDataset};
use derive_new::new;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::pipelines::text_classification;

/// The name of the cyberbullying dataset
pub static DATASET: &str = "cyberbullying";

/// The default location of the cyberbullying tweets corpus
pub static DEFAULT_FILE: &str = "cyberbullying_tweets.csv";

/// A tweet labeled with the type of cyberbullying it contains
#[derive(Clone, Debug, Serialize, Deserialize, new)]
pub struct Item {
    /// The tweet text
    pub tweet_text: String,

    /// The cyberbullying type (e.g. "religion", "not_cyberbullying")
    pub cyberbullying_type: String,
}

impl text_classification::Item for Item {
    fn input(&self) -> &str {
        &self.tweet_text
    }

    fn class_label(&self) -> &str {
        &self.cyberbullying_type
    }
}

/// Struct for the cyberbullying dataset
pub struct Dataset {
    /// Underlying In-Memory dataset
    dataset: InMemDataset<Item>,
}

impl dataset::Dataset<Item> for Dataset {
    fn get(&self, index: usize) -> Option<Item> {
        self.dataset.get(index)
    }

    fn len(&self) -> usize {
        self.dataset.len()
    }
}

impl Dataset {
    /// Load the corpus from a CSV file with `tweet_text` and `cyberbullying_type` columns
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let reader = csv::ReaderBuilder::new();
        let dataset = InMemDataset::from_csv(path.as_ref(), &reader)?;

        log::info!(
            "Loaded {} records from {}",
            dataset.len(),
            path.as_ref().display()
        );

        Ok(Self { dataset })
    }

    /// Build the dataset from records that are already in memory
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            dataset: InMemDataset::new(items),
        }
    }

    /// Draw a deterministic subsample of `n` records using the given seed.
    ///
    /// When the corpus is smaller than `n`, every record is returned in shuffled order.
    pub fn sample(&self, n: usize, seed: u64) -> Vec<Item> {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut indices: Vec<usize> = (0..self.len()).collect();
        indices.shuffle(&mut rng);

        if n > indices.len() {
            log::warn!(
                "Requested a sample of {} records but only {} are available",
                n,
                indices.len()
            );
        }

        indices
            .into_iter()
            .take(n)
            .filter_map(|i| self.get(i))
            .collect()
    }
}
