use newsdesk_core::{
    non_empty_input, Classifier, ClassifyError, CommandClassifier, KeywordClassifier,
    ValidationError,
};

#[test]
fn non_empty_input_rejects_empty_and_whitespace_only_text() {
    assert_eq!(non_empty_input(""), Err(ValidationError));
    assert_eq!(non_empty_input("   \n\t  "), Err(ValidationError));
}

#[test]
fn non_empty_input_returns_text_verbatim() {
    let text = "  padded but real  ";
    assert_eq!(non_empty_input(text), Ok(text));
}

#[test]
fn keyword_backend_is_deterministic() {
    let classifier = KeywordClassifier::new();

    let first = classifier.classify("Stocks rally on Fed news").unwrap();
    let second = classifier.classify("Stocks rally on Fed news").unwrap();
    assert_eq!(first, 3);
    assert_eq!(second, 3);
}

#[test]
fn keyword_backend_falls_back_when_nothing_matches() {
    let classifier = KeywordClassifier::new();
    assert_eq!(classifier.classify("zzzz qqqq").unwrap(), 29);
}

#[test]
fn command_backend_parses_integer_class_id_from_stdout() {
    let classifier = CommandClassifier::new(
        "sh",
        vec!["-c".to_string(), "cat > /dev/null; echo 7".to_string()],
    );

    assert_eq!(classifier.classify("any article text").unwrap(), 7);
}

#[test]
fn command_backend_reads_article_from_stdin() {
    // Echo back a digit derived from the input to prove stdin plumbing.
    let classifier = CommandClassifier::new(
        "sh",
        vec![
            "-c".to_string(),
            "grep -q sports && echo 21 || echo 3".to_string(),
        ],
    );

    assert_eq!(classifier.classify("a sports story").unwrap(), 21);
    assert_eq!(classifier.classify("a markets story").unwrap(), 3);
}

#[test]
fn command_backend_maps_missing_program_to_unavailable() {
    let classifier = CommandClassifier::new("/nonexistent/model-runner", Vec::new());

    let err = classifier.classify("text").unwrap_err();
    assert!(matches!(err, ClassifyError::Unavailable(_)));
}

#[test]
fn command_backend_maps_runner_failure_to_unavailable() {
    let classifier = CommandClassifier::new(
        "sh",
        vec!["-c".to_string(), "cat > /dev/null; exit 3".to_string()],
    );

    let err = classifier.classify("text").unwrap_err();
    assert!(matches!(err, ClassifyError::Unavailable(_)));
}

#[test]
fn command_backend_maps_non_integer_output_to_invalid_output() {
    let classifier = CommandClassifier::new(
        "sh",
        vec![
            "-c".to_string(),
            "cat > /dev/null; echo not-a-class-id".to_string(),
        ],
    );

    let err = classifier.classify("text").unwrap_err();
    assert!(matches!(err, ClassifyError::InvalidOutput(_)));
}

#[test]
fn from_command_line_splits_program_and_args() {
    assert!(CommandClassifier::from_command_line("").is_none());
    let classifier = CommandClassifier::from_command_line("sh -c 'echo 0'");
    assert!(classifier.is_some());
}
