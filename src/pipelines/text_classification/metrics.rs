use std::fmt;

/// Counts of true labels (rows) against predicted labels (columns)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    matrix: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    /// Tally predictions against true labels for classes `0..n_classes`.
    ///
    /// Pairs that reference a class outside that range are ignored.
    pub fn new(y_true: &[usize], y_pred: &[usize], n_classes: usize) -> Self {
        let mut matrix = vec![vec![0; n_classes]; n_classes];

        for (&truth, &pred) in y_true.iter().zip(y_pred) {
            if truth < n_classes && pred < n_classes {
                matrix[truth][pred] += 1;
            }
        }

        Self { matrix }
    }

    /// Number of classes
    pub fn n_classes(&self) -> usize {
        self.matrix.len()
    }

    fn true_positives(&self, class: usize) -> usize {
        self.matrix[class][class]
    }

    /// Everything predicted as `class`
    fn predicted(&self, class: usize) -> usize {
        self.matrix.iter().map(|row| row[class]).sum()
    }

    /// Everything that truly is `class`
    fn support(&self, class: usize) -> usize {
        self.matrix[class].iter().sum()
    }

    fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    fn accuracy(&self) -> f64 {
        let correct: usize = (0..self.n_classes()).map(|c| self.true_positives(c)).sum();

        ratio(correct, self.total())
    }
}

/// Aggregate classification metrics over a whole test set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricsReport {
    /// Fraction of exact matches
    pub accuracy: f64,

    /// Macro-averaged precision
    pub precision: f64,

    /// Macro-averaged recall
    pub recall: f64,

    /// Macro-averaged F1 score
    pub f1: f64,

    /// Number of evaluated samples
    pub n_samples: usize,
}

impl MetricsReport {
    /// Compute accuracy and macro precision, recall and F1 over every class id in
    /// `0..n_classes`.
    ///
    /// A per-class score with a zero denominator counts as 0, so classes without support still
    /// take part in the average.
    pub fn from_predictions(y_true: &[usize], y_pred: &[usize], n_classes: usize) -> Self {
        let cm = ConfusionMatrix::new(y_true, y_pred, n_classes);

        let mut precision = 0.0;
        let mut recall = 0.0;
        let mut f1 = 0.0;

        for class in 0..n_classes {
            let tp = cm.true_positives(class);
            let p = ratio(tp, cm.predicted(class));
            let r = ratio(tp, cm.support(class));

            precision += p;
            recall += r;
            f1 += if p + r > 0.0 { 2.0 * p * r / (p + r) } else { 0.0 };
        }

        let n = n_classes.max(1) as f64;

        Self {
            accuracy: cm.accuracy(),
            precision: precision / n,
            recall: recall / n,
            f1: f1 / n,
            n_samples: y_true.len().min(y_pred.len()),
        }
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accuracy: {:.4}", self.accuracy)?;
        writeln!(f, "Precision: {:.4}", self.precision)?;
        writeln!(f, "Recall: {:.4}", self.recall)?;
        write!(f, "F1 Score: {:.4}", self.f1)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
