use ai::AiError;
use std::io;

#[test]
fn test_ai_error_model_error() {
    let error = AiError::ModelError("Model is corrupted".to_string());
    assert_eq!(format!("{}", error), "Model error: Model is corrupted");
}

#[test]
fn test_ai_error_inference_error() {
    let error = AiError::InferenceError("Expected 3 embeddings, got 2".to_string());
    assert_eq!(
        format!("{}", error),
        "Inference error: Expected 3 embeddings, got 2"
    );
}

#[test]
fn test_ai_error_validation_error() {
    let error = AiError::ValidationError("Invalid batch size: 0".to_string());
    assert_eq!(
        format!("{}", error),
        "Validation error: Invalid batch size: 0"
    );
}

#[test]
fn test_ai_error_config_error() {
    let error = AiError::ConfigError("endpoint must not be empty".to_string());
    assert_eq!(format!("{}", error), "Config error: endpoint must not be empty");
}

#[test]
fn test_ai_error_network_error() {
    let error = AiError::NetworkError("HTTP 503: overloaded".to_string());
    assert_eq!(format!("{}", error), "Network error: HTTP 503: overloaded");
}

#[test]
fn test_ai_error_from_io() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
    let error: AiError = io_error.into();

    // Проверяем что это правильный вариант
    match error {
        AiError::IoError(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
        _ => panic!("Wrong error variant"),
    }
}
