use std::collections::{BTreeMap, BTreeSet};

use crate::{Error, Result};

/// A stable, bijective mapping between class label strings and class ids.
///
/// Labels are sorted before ids are assigned, so the same label set always produces the same
/// mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelEncoder {
    /// Class labels in id order
    classes: Vec<String>,

    /// A mapping from class name labels to class ids
    label2id: BTreeMap<String, usize>,
}

impl LabelEncoder {
    /// Fit the encoder on every distinct label in the given sequence
    pub fn fit<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes: Vec<String> = labels
            .into_iter()
            .map(|label| label.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if classes.is_empty() {
            return Err(Error::NoClasses);
        }

        let label2id = classes
            .iter()
            .enumerate()
            .map(|(id, label)| (label.clone(), id))
            .collect();

        Ok(Self { classes, label2id })
    }

    /// Map a label to its class id
    pub fn encode(&self, label: &str) -> Result<usize> {
        self.label2id
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))
    }

    /// Map a class id back to its label
    pub fn decode(&self, id: usize) -> Result<&str> {
        self.classes
            .get(id)
            .map(String::as_str)
            .ok_or(Error::UnknownClassId {
                id,
                n_classes: self.classes.len(),
            })
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// A fitted encoder always has at least one class
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class labels in id order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// A mapping from class ids to class name labels
    pub fn id2label(&self) -> BTreeMap<usize, String> {
        self.classes.iter().cloned().enumerate().collect()
    }
}
