use groovecli::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_title_case() {
    assert_eq!(title_case("new jack swing"), "New Jack Swing");
    assert_eq!(title_case("jazz"), "Jazz");
    assert_eq!(title_case(""), "");

    // Already-capitalized input stays as it is
    assert_eq!(title_case("Lo-Fi Beats"), "Lo-Fi Beats");

    // Extra whitespace collapses to single separators
    assert_eq!(title_case("  ambient   techno "), "Ambient Techno");
}

#[test]
fn test_dedup_preserving_order() {
    let mut ids = vec![
        "a".to_string(),
        "b".to_string(),
        "a".to_string(),
        "c".to_string(),
        "b".to_string(),
    ];

    dedup_preserving_order(&mut ids);

    assert_eq!(ids, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
}

#[test]
fn test_dedup_preserving_order_no_duplicates() {
    let mut ids = vec!["x".to_string(), "y".to_string()];
    dedup_preserving_order(&mut ids);
    assert_eq!(ids.len(), 2);
}
