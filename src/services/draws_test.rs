use std::cell::RefCell;

use futures::executor::block_on;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::*;
use crate::net::types::DrawStatus;

#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    method: &'static str,
    path: String,
    body: Option<Value>,
}

/// Records every call and answers with a canned result.
struct RecordingClient {
    calls: RefCell<Vec<Recorded>>,
    response: Result<Value, ApiError>,
}

impl RecordingClient {
    fn answering(body: Value) -> Self {
        Self { calls: RefCell::new(Vec::new()), response: Ok(body) }
    }

    fn failing(err: ApiError) -> Self {
        Self { calls: RefCell::new(Vec::new()), response: Err(err) }
    }

    fn calls(&self) -> Vec<Recorded> {
        self.calls.borrow().clone()
    }

    fn respond<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let body = self.response.clone()?;
        Ok(serde_json::from_value(body)?)
    }
}

impl ApiClient for RecordingClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.calls.borrow_mut().push(Recorded { method: "GET", path: path.to_owned(), body: None });
        self.respond()
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.calls.borrow_mut().push(Recorded { method: "POST", path: path.to_owned(), body: Some(body) });
        self.respond()
    }
}

fn draw_body(status: &str) -> Value {
    json!({
        "id": 44,
        "tournamentId": 7,
        "eventId": "ms",
        "structure": { "rounds": [{ "name": "Final", "matches": [{ "home": "A", "away": "B" }] }] },
        "status": status
    })
}

#[test]
fn fetch_issues_one_get_to_composite_path() {
    let client = RecordingClient::answering(draw_body("draft"));
    let service = DrawService::new(&client);

    let draw = block_on(service.fetch_draw_by_tournament_and_event(&Identifier::Number(7), &Identifier::from("ms")))
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![Recorded { method: "GET", path: "/draws/tournament/7/event/ms".to_owned(), body: None }]
    );
    assert_eq!(draw, serde_json::from_value::<Draw>(draw_body("draft")).unwrap());
}

#[test]
fn publish_without_payload_posts_empty_object() {
    let client = RecordingClient::answering(draw_body("published"));
    let service = DrawService::new(&client);

    let draw = block_on(service.publish_draw(&Identifier::Number(44), None)).unwrap();

    assert_eq!(
        client.calls(),
        vec![Recorded { method: "POST", path: "/draws/44/publish".to_owned(), body: Some(json!({})) }]
    );
    assert_eq!(draw.status, DrawStatus::Published);
}

#[test]
fn publish_with_payload_posts_payload_verbatim() {
    let client = RecordingClient::answering(draw_body("published"));
    let service = DrawService::new(&client);
    let payload = PublishPayload::default().with("notifyPlayers", true);

    block_on(service.publish_draw(&Identifier::from("d-44"), Some(&payload))).unwrap();

    assert_eq!(
        client.calls(),
        vec![Recorded {
            method: "POST",
            path: "/draws/d-44/publish".to_owned(),
            body: Some(json!({ "notifyPlayers": true })),
        }]
    );
}

#[test]
fn fetch_propagates_client_error_unchanged() {
    let client = RecordingClient::failing(ApiError::status(404, "Not Found"));
    let service = DrawService::new(&client);

    let err = block_on(service.fetch_draw_by_tournament_and_event(&Identifier::Number(1), &Identifier::Number(2)))
        .unwrap_err();

    assert_eq!(err, ApiError::status(404, "Not Found"));
    assert_eq!(client.calls().len(), 1);
}

#[test]
fn publish_propagates_client_error_unchanged() {
    let client = RecordingClient::failing(ApiError::Network("offline".to_owned()));
    let service = DrawService::new(&client);

    let err = block_on(service.publish_draw(&Identifier::Number(3), None)).unwrap_err();

    assert_eq!(err, ApiError::Network("offline".to_owned()));
    assert_eq!(client.calls().len(), 1);
}
