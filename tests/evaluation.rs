mod common;

use burn::{
    backend::NdArray,
    module::{AutodiffModule, Param},
    tensor::{Data, Shape, Tensor},
};
use pretty_assertions::assert_eq;
use tweet_classifier::pipelines::text_classification::{batcher, evaluate, predict, Batcher};

use common::{
    dataset, encoder, labels, TestBackend, TinyClassifier, DEVICE, EMBEDDING_SIZE, VOCAB,
};

fn model() -> TinyClassifier<NdArray> {
    TinyClassifier::<TestBackend>::new(VOCAB.len(), labels().len(), &DEVICE).valid()
}

fn weights<const D: usize>(values: Vec<f32>, shape: [usize; D]) -> Param<Tensor<NdArray, D>> {
    Param::from(Tensor::from_data(Data::new(values, Shape::new(shape)), &DEVICE))
}

/// Scores "whale" and "animal" up and "girls" and "school" down on the first embedding axis, so
/// every fixture item leans toward its own label. A negative `sign` flips the two classes.
fn keyword_model(sign: f32) -> TinyClassifier<NdArray> {
    let mut model = model();

    let mut embedding = vec![0.0; VOCAB.len() * EMBEDDING_SIZE];
    for (word, score) in [("whale", 1.0), ("animal", 1.0), ("girls", -1.0), ("school", -1.0)] {
        let id = VOCAB.iter().position(|w| *w == word).expect("word in vocab");
        embedding[id * EMBEDDING_SIZE] = score;
    }
    model.embedding.weight = weights(embedding, [VOCAB.len(), EMBEDDING_SIZE]);

    // Classes are sorted: gender = 0, nature = 1
    let mut output = vec![0.0; EMBEDDING_SIZE * 2];
    output[0] = -sign;
    output[1] = sign;
    model.output.weight = weights(output, [EMBEDDING_SIZE, 2]);
    model.output.bias = None;

    model
}

/// Ignores its input and always predicts "nature"
fn constant_model() -> TinyClassifier<NdArray> {
    let mut model = model();

    model.output.weight = weights(vec![0.0; EMBEDDING_SIZE * 2], [EMBEDDING_SIZE, 2]);
    model.output.bias = Some(weights(vec![0.0, 1.0], [2]));

    model
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn correct_predictions_score_perfectly() {
    let model = keyword_model(1.0);

    let report = evaluate(
        &model,
        batcher::loader::<NdArray>(dataset(), 3, None, DEVICE).as_ref(),
        labels().len(),
    );

    assert_eq!(report.n_samples, 10);
    assert_close(report.accuracy, 1.0);
    assert_close(report.precision, 1.0);
    assert_close(report.recall, 1.0);
    assert_close(report.f1, 1.0);
}

#[test]
fn swapped_predictions_score_zero() {
    let model = keyword_model(-1.0);

    let report = evaluate(
        &model,
        batcher::loader::<NdArray>(dataset(), 4, None, DEVICE).as_ref(),
        labels().len(),
    );

    assert_close(report.accuracy, 0.0);
    assert_close(report.f1, 0.0);
}

#[test]
fn predictions_are_scored_against_their_own_targets() {
    let model = constant_model();

    let report = evaluate(
        &model,
        batcher::loader::<NdArray>(dataset(), 3, None, DEVICE).as_ref(),
        labels().len(),
    );

    // Five of each class: "nature" has precision 0.5 and recall 1, "gender" scores 0
    assert_close(report.accuracy, 0.5);
    assert_close(report.precision, 0.25);
    assert_close(report.recall, 0.5);
}

#[test]
fn evaluates_every_test_sample_once() {
    let model = model();
    let loader = batcher::loader::<NdArray>(dataset(), 3, None, DEVICE);

    let report = evaluate(&model, loader.as_ref(), labels().len());

    assert_eq!(report.n_samples, 10);
    for score in [report.accuracy, report.precision, report.recall, report.f1] {
        assert!((0.0..=1.0).contains(&score), "{score} is out of range");
    }
}

#[test]
fn evaluation_does_not_depend_on_batch_size() {
    let model = model();

    let small = evaluate(
        &model,
        batcher::loader::<NdArray>(dataset(), 3, None, DEVICE).as_ref(),
        labels().len(),
    );
    let large = evaluate(
        &model,
        batcher::loader::<NdArray>(dataset(), 10, None, DEVICE).as_ref(),
        labels().len(),
    );

    assert_eq!(small.n_samples, large.n_samples);
    assert!((small.accuracy - large.accuracy).abs() < 1e-9);
    assert!((small.f1 - large.f1).abs() < 1e-9);
}

#[test]
fn predict_is_deterministic_for_fixed_weights() {
    let model = model();
    let encoder = encoder();
    let labels = labels();
    let batcher = Batcher::<NdArray>::new(DEVICE);

    let text = "A whale is the biggest animal on the planet";

    let first = predict(&model, &encoder, &batcher, &labels, text).expect("prediction");
    let second = predict(&model, &encoder, &batcher, &labels, text).expect("prediction");

    assert_eq!(first, second);
    assert!(labels.classes().contains(&first));
}

#[test]
fn predict_rejects_text_without_tokens() {
    let model = model();
    let batcher = Batcher::<NdArray>::new(DEVICE);

    assert!(predict(&model, &encoder(), &batcher, &labels(), "").is_err());
}
