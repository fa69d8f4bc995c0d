use std::fmt::Debug;

use crate::Result;

use super::LabelEncoder;

/// A labeled text record that can be used for text classification
pub trait Item: Send + Sync + Clone + Debug {
    /// Returns the input text for the item
    fn input(&self) -> &str;

    /// Returns the class label for the item
    fn class_label(&self) -> &str;

    /// Returns the class id of the item's label
    fn class_id(&self, labels: &LabelEncoder) -> Result<usize> {
        labels.encode(self.class_label())
    }
}
