//! End-to-end tests for the validate-then-predict flow against artifacts on
//! disk.

use admitir::prelude::*;
use std::path::Path;

fn fixture_scaler() -> StandardScaler {
    StandardScaler::from_stats(
        vec![316.0, 107.0, 3.0, 3.5, 3.5, 8.6, 0.5],
        vec![11.0, 6.0, 1.0, 1.0, 1.0, 0.6, 0.5],
    )
    .expect("Valid statistics")
}

fn fixture_model() -> Lasso {
    Lasso::from_parameters(
        vec![0.02, 0.018, 0.005, 0.004, 0.012, 0.068, 0.012],
        0.72,
    )
    .with_alpha(0.01)
}

fn write_artifacts(dir: &Path) {
    fixture_scaler()
        .save_safetensors(dir.join(SCALER_FILE))
        .expect("Scaler save should succeed");
    fixture_model()
        .save_safetensors(dir.join(MODEL_FILE))
        .expect("Model save should succeed");
}

fn filled_form() -> ApplicantForm {
    ApplicantForm {
        gre_score: "320".to_string(),
        toefl_score: "110".to_string(),
        university_rating: "4".to_string(),
        sop: "4.5".to_string(),
        lor: "4".to_string(),
        cgpa: "9.1".to_string(),
        research: "1".to_string(),
    }
}

#[test]
fn submit_flow_validates_then_predicts() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    write_artifacts(dir.path());

    let form = filled_form();

    let warnings = validate_form(&form);
    assert!(warnings.is_empty());

    let predictor = Predictor::open(dir.path()).expect("Open should succeed");
    let prediction = predictor.predict(&form).expect("Predict should succeed");

    // Direct application of the same artifacts outside the engine must give
    // the identical scaled vector and scalar output.
    let row = FeatureVector::new([320.0, 110.0, 4.0, 4.5, 4.0, 9.1, 1.0]);
    let scaler = StandardScaler::load_safetensors(dir.path().join(SCALER_FILE))
        .expect("Scaler load should succeed");
    let model =
        Lasso::load_safetensors(dir.path().join(MODEL_FILE)).expect("Model load should succeed");

    let mut scaled = [0.0f32; N_FEATURES];
    for (j, slot) in scaled.iter_mut().enumerate() {
        *slot = (row.values()[j] - scaler.mean()[j]) / scaler.std()[j];
    }
    assert_eq!(
        predictor
            .scaler()
            .transform(&row)
            .expect("Transform should succeed")
            .values(),
        &scaled
    );

    let mut output = model.intercept();
    for (coef, value) in model.coefficients().iter().zip(scaled.iter()) {
        output += coef * value;
    }
    assert_eq!(prediction.percentage(), (output * 100.0).round());
}

#[test]
fn repeated_submissions_are_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    write_artifacts(dir.path());

    let form = filled_form();
    let predictor = Predictor::open(dir.path()).expect("Open should succeed");

    let first = predictor.predict(&form).expect("Predict should succeed");
    let second = predictor.predict(&form).expect("Predict should succeed");
    assert_eq!(first, second);

    // A second predictor over the same artifacts agrees too.
    let reopened = Predictor::open(dir.path()).expect("Open should succeed");
    assert_eq!(reopened.predict(&form).expect("Predict"), first);
}

#[test]
fn out_of_range_input_warns_but_still_predicts() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    write_artifacts(dir.path());

    let mut form = filled_form();
    form.toefl_score = "121".to_string();

    let warnings = validate_form(&form);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "TOEFL Score");
    assert_eq!(warnings[0].kind, WarningKind::OutOfRange);

    let predictor = Predictor::open(dir.path()).expect("Open should succeed");
    assert!(predictor.predict(&form).is_ok());
}

#[test]
fn incomplete_form_never_reaches_the_model() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    write_artifacts(dir.path());

    let predictor = Predictor::open(dir.path()).expect("Open should succeed");

    let mut form = filled_form();
    form.gre_score = String::new();

    // The empty field produces no advisory warning...
    assert!(validate_form(&form).is_empty());

    // ...but blocks the predict step.
    let err = predictor.predict(&form).expect_err("Should fail");
    match err {
        AdmitirError::IncompleteInput { field } => assert_eq!(field, "GRE Score"),
        other => panic!("Expected IncompleteInput, got {other:?}"),
    }
}

#[test]
fn non_numeric_input_warns_and_fails_prediction() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    write_artifacts(dir.path());

    let mut form = filled_form();
    form.sop = "excellent".to_string();

    let warnings = validate_form(&form);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::NonNumeric);

    let predictor = Predictor::open(dir.path()).expect("Open should succeed");
    let err = predictor.predict(&form).expect_err("Should fail");
    match err {
        AdmitirError::InvalidFeatureValue { field, value } => {
            assert_eq!(field, "SOP");
            assert_eq!(value, "excellent");
        }
        other => panic!("Expected InvalidFeatureValue, got {other:?}"),
    }
}

#[test]
fn missing_artifacts_fail_distinctly_from_input_errors() {
    let dir = tempfile::tempdir().expect("tempdir should create");

    let err = Predictor::open(dir.path()).expect_err("No artifacts should fail");
    match err {
        AdmitirError::ArtifactUnavailable { artifact, reason } => {
            assert_eq!(artifact, SCALER_FILE);
            assert!(reason.contains("File read failed"));
        }
        other => panic!("Expected ArtifactUnavailable, got {other:?}"),
    }
}

#[test]
fn truncated_artifact_fails_distinctly() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    write_artifacts(dir.path());

    // Truncate the scaler to just part of its header.
    std::fs::write(dir.path().join(SCALER_FILE), [1u8, 2, 3]).expect("Write should succeed");

    let err = Predictor::open(dir.path()).expect_err("Truncated scaler should fail");
    match err {
        AdmitirError::ArtifactUnavailable { artifact, .. } => assert_eq!(artifact, SCALER_FILE),
        other => panic!("Expected ArtifactUnavailable, got {other:?}"),
    }
}

#[test]
fn shared_predictor_caches_after_first_load() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    write_artifacts(dir.path());

    let first = admitir::engine::shared(dir.path()).expect("First load should succeed");
    let second = admitir::engine::shared(dir.path()).expect("Cached load should succeed");
    assert!(std::ptr::eq(first, second));

    let form = filled_form();
    assert_eq!(
        first.predict(&form).expect("Predict"),
        second.predict(&form).expect("Predict")
    );
}

#[test]
fn feature_columns_match_artifact_training_order() {
    assert_eq!(
        FEATURE_COLUMNS,
        [
            "GRE Score",
            "TOEFL Score",
            "University Rating",
            "SOP",
            "LOR",
            "CGPA",
            "Research",
        ]
    );
}
