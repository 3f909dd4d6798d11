use super::*;

// =============================================================
// AskRequest
// =============================================================

#[test]
fn ask_request_serializes_coordinates() {
    let request = AskRequest::new("Where?", "Quicky", Some(Coordinates { lat: 43.65, lng: -79.38 }));
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "question": "Where?", "name": "Quicky", "lat": 43.65, "lng": -79.38 })
    );
}

#[test]
fn ask_request_without_location_sends_nulls() {
    let request = AskRequest::new("Where?", "Quicky", None);
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["lat"], serde_json::Value::Null);
    assert_eq!(json["lng"], serde_json::Value::Null);
}

// =============================================================
// AskResponse
// =============================================================

#[test]
fn ask_response_reads_answer_and_ignores_extra_fields() {
    let body: AskResponse = serde_json::from_str(r#"{"answer":"**KitKat** is sold here","source":"x"}"#).unwrap();
    assert_eq!(body.answer, "**KitKat** is sold here");
}

#[test]
fn ask_response_without_answer_fails() {
    assert!(serde_json::from_str::<AskResponse>(r#"{"detail":"boom"}"#).is_err());
}

// =============================================================
// AnswerError
// =============================================================

#[test]
fn answer_error_messages() {
    assert_eq!(AnswerError::Status { status: 500 }.to_string(), "answer request failed: status 500");
    assert_eq!(
        AnswerError::Transport("offline".to_owned()).to_string(),
        "answer request failed: offline"
    );
}
