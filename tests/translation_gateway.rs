#![allow(clippy::unwrap_used)]
//! Translation gateway contract tests against a mock endpoint.

use samvad_cli::language::{Language, fallback_message};
use samvad_cli::translation::TranslationGateway;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(server: &MockServer) -> TranslationGateway {
    TranslationGateway::new(format!("{}/translate", server.uri()), "test-key".to_string())
}

#[tokio::test]
async fn test_translate_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "input": "Good morning",
            "source_language_code": "en-IN",
            "target_language_code": "HI-IN",
            "mode": "formal"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"translated_text": "सुप्रभात"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let translated = gateway(&mock_server)
        .translate("Good morning", Language::Hindi)
        .await;
    assert_eq!(translated, "सुप्रभात");
}

#[tokio::test]
async fn test_translate_sends_name_derived_target_codes() {
    // Kannada and Malayalam use name-derived codes, not ISO 639-1.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_partial_json(
            serde_json::json!({"target_language_code": "KA-IN"}),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"translated_text": "ನಮಸ್ಕಾರ"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let translated = gateway(&mock_server)
        .translate("Greetings", Language::Kannada)
        .await;
    assert_eq!(translated, "ನಮಸ್ಕಾರ");
}

#[tokio::test]
async fn test_canned_message_short_circuits_without_remote_call() {
    let mock_server = MockServer::start().await;

    // Any request to the server at all is a failure.
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"translated_text": "unused"})),
        )
        .expect(0)
        .mount(&mock_server)
        .await;

    let english_canned = fallback_message(Language::English);
    let translated = gateway(&mock_server)
        .translate(english_canned, Language::Hindi)
        .await;

    assert_eq!(translated, fallback_message(Language::Hindi));
}

#[tokio::test]
async fn test_canned_message_short_circuit_is_table_wide() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    // A canned message in any language swaps to the target's entry.
    let tamil_canned = fallback_message(Language::Tamil);
    let translated = gateway(&mock_server)
        .translate(tamil_canned, Language::Malayalam)
        .await;

    assert_eq!(translated, fallback_message(Language::Malayalam));
}

#[tokio::test]
async fn test_server_error_falls_back_to_canned_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let translated = gateway(&mock_server)
        .translate("Good morning", Language::Telugu)
        .await;
    assert_eq!(translated, fallback_message(Language::Telugu));
}

#[tokio::test]
async fn test_malformed_response_falls_back_to_canned_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "x"})))
        .mount(&mock_server)
        .await;

    let translated = gateway(&mock_server)
        .translate("Good morning", Language::Tamil)
        .await;
    assert_eq!(translated, fallback_message(Language::Tamil));
}

#[tokio::test]
async fn test_unreachable_endpoint_falls_back_to_canned_message() {
    let unreachable = TranslationGateway::new(
        "http://127.0.0.1:9/translate".to_string(),
        "test-key".to_string(),
    );

    let translated = unreachable.translate("Good morning", Language::Hindi).await;
    assert_eq!(translated, fallback_message(Language::Hindi));
}
