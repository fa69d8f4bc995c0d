/// Errors raised while preparing data or running the classification pipeline
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A label string that was not present when the label encoder was fitted
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    /// A class id outside of the fitted range
    #[error("unknown class id {id}, expected a value below {n_classes}")]
    UnknownClassId {
        /// The requested class id
        id: usize,
        /// Number of fitted classes
        n_classes: usize,
    },

    /// A label encoder cannot be fitted without any labels
    #[error("no class labels were found")]
    NoClasses,

    /// The test fraction for a train/test split must be strictly between 0 and 1
    #[error("invalid test fraction {0}, expected a value in (0, 1)")]
    InvalidFraction(f64),

    /// Out of range sample access
    #[error("index {index} is out of range for a dataset of length {len}")]
    Index {
        /// The requested index
        index: usize,
        /// The dataset length
        len: usize,
    },

    /// The tokenizer could not encode the input
    #[error("unable to encode input: {0}")]
    Encoding(String),

    /// Encoded rows and labels don't line up
    #[error("{rows} encoded rows were given with {labels} labels")]
    ShapeMismatch {
        /// Number of encoded rows
        rows: usize,
        /// Number of labels
        labels: usize,
    },

    /// An encoded batch without exactly one attention mask per row
    #[error("{rows} encoded rows were given with {masks} attention masks")]
    MaskMismatch {
        /// Number of token id rows
        rows: usize,
        /// Number of attention mask rows
        masks: usize,
    },

    /// An encoded row or mask that is not padded to the batch sequence length
    #[error("encoded row {row} has length {found}, expected {expected}")]
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// The batch sequence length
        expected: usize,
        /// The row length found
        found: usize,
    },

    /// The model collaborator failed to load or run
    #[error("model execution failed: {0}")]
    ModelExecution(String),

    /// IO failure while reading the corpus
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for the crate's error type
pub type Result<T, E = Error> = std::result::Result<T, E>;
