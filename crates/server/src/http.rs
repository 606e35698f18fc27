// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! HTTP routes and handlers.
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use log::info;
use serde::Serialize;
use thiserror::Error;

use deckhand_cards::{Card, DeckId};

use crate::service::{self, DeckService};

/// Creates the server routes.
pub fn router(service: DeckService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/deck", get(create_or_open_deck))
        .route("/deck/{deck_id}/draw", get(draw_cards))
        .with_state(service)
}

/// Query string as a list of key value pairs.
///
/// Keys may repeat, the first value for a key wins. A query string that fails
/// to decode is handled as an empty query.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Query parameters for the `/deck` route.
#[derive(Debug)]
struct DeckParams {
    /// Opens an existing deck if set.
    deck_id: Option<String>,
    /// Shuffle the new deck.
    shuffled: Option<String>,
    /// Comma separated card codes for a partial deck.
    cards: Option<String>,
}

impl DeckParams {
    fn from_query(query: QueryPairs) -> Self {
        let pairs = query_pairs(query);
        Self {
            deck_id: first_value(&pairs, "deckId"),
            shuffled: first_value(&pairs, "shuffled"),
            cards: first_value(&pairs, "cards"),
        }
    }
}

/// Query parameters for the draw route.
#[derive(Debug)]
struct DrawParams {
    /// Number of cards to draw.
    count: Option<String>,
}

impl DrawParams {
    fn from_query(query: QueryPairs) -> Self {
        let pairs = query_pairs(query);
        Self {
            count: first_value(&pairs, "count"),
        }
    }
}

fn query_pairs(query: QueryPairs) -> Vec<(String, String)> {
    match query {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            info!("Ignoring query string: {e}");
            Vec::new()
        }
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Response for a new deck.
#[derive(Debug, Serialize)]
struct CreateDeckResponse {
    deck_id: DeckId,
    shuffled: bool,
    remaining: usize,
}

/// Response for a draw.
#[derive(Debug, Serialize)]
struct DrawResponse {
    deck_id: DeckId,
    shuffled: bool,
    remaining: usize,
    cards: Vec<Card>,
}

/// Request errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The deck id is not a valid id.
    #[error("Invalid deck ID")]
    InvalidDeckId,
    /// The count is missing or not a non negative integer.
    #[error("Invalid count parameter")]
    InvalidCount,
    /// The deck operation failed.
    #[error(transparent)]
    Service(#[from] service::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        info!("Request failed: {self}");

        let (status, body) = match self {
            ApiError::InvalidDeckId => (StatusCode::BAD_REQUEST, "Invalid deck ID"),
            ApiError::InvalidCount => (StatusCode::BAD_REQUEST, "Invalid count parameter"),
            ApiError::Service(service::Error::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Deck not found")
            }
            ApiError::Service(service::Error::NotEnoughCards { .. }) => (
                StatusCode::BAD_REQUEST,
                "Not enough cards remaining in the deck",
            ),
        };

        (status, body).into_response()
    }
}

async fn health() -> &'static str {
    info!("Health check");
    "OK"
}

/// Opens the deck given by `deckId` or creates a new one.
async fn create_or_open_deck(
    State(service): State<DeckService>,
    query: QueryPairs,
) -> Result<Response, ApiError> {
    let params = DeckParams::from_query(query);
    match params.deck_id.as_deref() {
        Some(deck_id) if !deck_id.is_empty() => {
            let deck_id = parse_deck_id(deck_id)?;
            let deck = service.get(&deck_id)?;
            info!("Opened deck {} remaining: {}", deck_id, deck.remaining());
            Ok(Json(deck).into_response())
        }
        _ => {
            let shuffled = params.shuffled.as_deref().and_then(parse_bool).unwrap_or(false);
            let cards = params.cards.as_deref().unwrap_or_default();
            let deck = service.create(shuffled, cards);

            Ok(Json(CreateDeckResponse {
                deck_id: deck.id(),
                shuffled: deck.is_shuffled(),
                remaining: deck.remaining(),
            })
            .into_response())
        }
    }
}

async fn draw_cards(
    State(service): State<DeckService>,
    Path(deck_id): Path<String>,
    query: QueryPairs,
) -> Result<Json<DrawResponse>, ApiError> {
    let deck_id = parse_deck_id(&deck_id)?;
    let count = DrawParams::from_query(query)
        .count
        .as_deref()
        .and_then(|c| c.parse::<usize>().ok())
        .ok_or(ApiError::InvalidCount)?;

    let (deck, cards) = service.draw(&deck_id, count)?;

    Ok(Json(DrawResponse {
        deck_id: deck.id(),
        shuffled: deck.is_shuffled(),
        remaining: deck.remaining(),
        cards,
    }))
}

fn parse_deck_id(s: &str) -> Result<DeckId, ApiError> {
    s.parse().map_err(|_| ApiError::InvalidDeckId)
}

/// Parses a boolean query value, accepts 1, t, T, true, TRUE, True and
/// their false counterparts.
fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DeckStore;
    use serde_json::Value;

    fn service() -> DeckService {
        DeckService::new(DeckStore::new())
    }

    async fn body(res: impl IntoResponse) -> (StatusCode, Vec<u8>) {
        let res = res.into_response();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn json(res: impl IntoResponse) -> (StatusCode, Value) {
        let (status, bytes) = body(res).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn text(res: impl IntoResponse) -> (StatusCode, String) {
        let (status, bytes) = body(res).await;
        (status, String::from_utf8(bytes).unwrap())
    }

    fn query(pairs: &[(&str, &str)]) -> QueryPairs {
        Ok(Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    fn deck_params(shuffled: &str, cards: &str) -> QueryPairs {
        query(&[("shuffled", shuffled), ("cards", cards)])
    }

    fn open_params(deck_id: &str) -> QueryPairs {
        query(&[("deckId", deck_id)])
    }

    fn draw_params(count: &str) -> QueryPairs {
        query(&[("count", count)])
    }

    #[tokio::test]
    async fn health_check() {
        let (status, body) = text(health().await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn create_deck() {
        let service = service();
        let res = create_or_open_deck(
            State(service.clone()),
            deck_params("true", "AS,KD,AC,2C,KH"),
        )
        .await;

        let (status, json) = json(res).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["shuffled"], true);
        assert_eq!(json["remaining"], 5);
        assert!(json.get("cards").is_none());

        let deck_id = json["deck_id"].as_str().unwrap().parse::<DeckId>().unwrap();
        assert_eq!(service.get(&deck_id).unwrap().remaining(), 5);
    }

    #[tokio::test]
    async fn create_default_deck() {
        let res = create_or_open_deck(State(service()), query(&[])).await;

        let (status, json) = json(res).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["shuffled"], false);
        assert_eq!(json["remaining"], 52);
    }

    #[tokio::test]
    async fn create_invalid_shuffled() {
        let res = create_or_open_deck(State(service()), deck_params("yes", "")).await;

        let (_, json) = json(res).await;
        assert_eq!(json["shuffled"], false);
    }

    #[tokio::test]
    async fn open_deck() {
        let service = service();
        let deck = service.create(false, "");

        let res = create_or_open_deck(
            State(service.clone()),
            open_params(&deck.id().to_string()),
        )
        .await;

        let (status, json) = json(res).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["deck_id"], deck.id().to_string());
        assert_eq!(json["shuffled"], false);
        assert_eq!(json["remaining"], 52);
        assert_eq!(json["cards"].as_array().unwrap().len(), 52);
        assert_eq!(json["cards"][0]["code"], "2S");
        assert_eq!(json["cards"][0]["value"], "2");
        assert_eq!(json["cards"][0]["suit"], "SPADES");
    }

    #[tokio::test]
    async fn open_invalid_deck() {
        let res = create_or_open_deck(State(service()), open_params("invalid")).await;
        let (status, body) = text(res).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid deck ID");

        let id = DeckId::new_id().to_string();
        let res = create_or_open_deck(State(service()), open_params(&id)).await;
        let (status, body) = text(res).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Deck not found");
    }

    #[tokio::test]
    async fn draw_from_deck() {
        let service = service();
        let deck = service.create(false, "AS,KD,AC,2C,KH");

        let res = draw_cards(
            State(service.clone()),
            Path(deck.id().to_string()),
            draw_params("2"),
        )
        .await;

        let (status, json) = json(res).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["deck_id"], deck.id().to_string());
        assert_eq!(json["remaining"], 3);
        assert_eq!(json["cards"][0]["code"], "AS");
        assert_eq!(json["cards"][1]["code"], "KD");
        assert_eq!(json["cards"][1]["value"], "KING");
        assert_eq!(json["cards"][1]["suit"], "DIAMONDS");

        assert_eq!(service.get(&deck.id()).unwrap().remaining(), 3);
    }

    #[tokio::test]
    async fn draw_errors() {
        let service = service();
        let deck = service.create(false, "AS,KD");
        let deck_id = deck.id().to_string();

        let res = draw_cards(
            State(service.clone()),
            Path("invalid".to_string()),
            draw_params("1"),
        )
        .await;
        let (status, body) = text(res).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid deck ID");

        for count in ["", "abc", "-1"] {
            let res = draw_cards(
                State(service.clone()),
                Path(deck_id.clone()),
                draw_params(count),
            )
            .await;
            let (status, body) = text(res).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, "Invalid count parameter");
        }

        let res = draw_cards(
            State(service.clone()),
            Path(deck_id.clone()),
            query(&[]),
        )
        .await;
        let (status, _) = text(res).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let res = draw_cards(
            State(service.clone()),
            Path(DeckId::new_id().to_string()),
            draw_params("1"),
        )
        .await;
        let (status, body) = text(res).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Deck not found");

        let res = draw_cards(State(service.clone()), Path(deck_id), draw_params("3")).await;
        let (status, body) = text(res).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Not enough cards remaining in the deck");
        assert_eq!(service.get(&deck.id()).unwrap().remaining(), 2);
    }

    #[tokio::test]
    async fn repeated_query_keys() {
        let service = service();

        let res = create_or_open_deck(
            State(service.clone()),
            query(&[("cards", "AS"), ("cards", "KD"), ("shuffled", "false")]),
        )
        .await;
        let (status, created) = json(res).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["remaining"], 1);

        let deck_id = created["deck_id"].as_str().unwrap().to_string();
        let deck = service.get(&deck_id.parse().unwrap()).unwrap();
        assert_eq!(deck.cards()[0].code(), "AS");

        let res = draw_cards(
            State(service.clone()),
            Path(deck_id.clone()),
            query(&[("count", "1"), ("count", "2")]),
        )
        .await;
        let (status, drawn) = json(res).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(drawn["cards"].as_array().unwrap().len(), 1);
        assert_eq!(drawn["remaining"], 0);

        let res = create_or_open_deck(
            State(service.clone()),
            query(&[("deckId", deck_id.as_str()), ("deckId", "invalid")]),
        )
        .await;
        let (status, opened) = json(res).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(opened["deck_id"], deck_id);
    }

    #[test]
    fn bool_values() {
        for s in ["1", "t", "T", "true", "TRUE", "True"] {
            assert_eq!(parse_bool(s), Some(true));
        }

        for s in ["0", "f", "F", "false", "FALSE", "False"] {
            assert_eq!(parse_bool(s), Some(false));
        }

        assert_eq!(parse_bool(""), None);
        assert_eq!(parse_bool("yes"), None);
    }
}
