// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck operations used by the request handlers.
use log::{debug, info};
use thiserror::Error;

use deckhand_cards::{Card, Deck, DeckId, DrawError, Selection};

use crate::store::DeckStore;

/// Deck service errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// There is no deck with the given id.
    #[error("deck {0} not found")]
    NotFound(DeckId),
    /// The deck has fewer cards than requested.
    #[error("not enough cards remaining in the deck (requested {requested}, remaining {remaining})")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

impl From<DrawError> for Error {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::NotEnoughCards {
                requested,
                remaining,
            } => Error::NotEnoughCards {
                requested,
                remaining,
            },
        }
    }
}

/// Creates, opens, and draws from decks kept in a [DeckStore].
#[derive(Debug, Clone)]
pub struct DeckService {
    store: DeckStore,
}

impl DeckService {
    /// Creates a service that keeps decks in the given store.
    pub fn new(store: DeckStore) -> Self {
        Self { store }
    }

    /// Creates and saves a new deck.
    ///
    /// `cards` is a comma separated list of card codes, an empty string creates
    /// a full deck. Codes that don't match a card are skipped.
    pub fn create(&self, shuffled: bool, cards: &str) -> Deck {
        let selection = Selection::parse(cards);
        if !selection.unmatched().is_empty() {
            debug!("Skipping unknown card codes {:?}", selection.unmatched());
        }

        let deck = Deck::new(shuffled, selection);
        info!(
            "Created deck {} shuffled: {} remaining: {}",
            deck.id(),
            deck.is_shuffled(),
            deck.remaining()
        );

        self.store.save(deck.clone());
        deck
    }

    /// Gets a deck.
    pub fn get(&self, deck_id: &DeckId) -> Result<Deck, Error> {
        self.store.get(deck_id).ok_or(Error::NotFound(*deck_id))
    }

    /// Draws `count` cards from a deck and returns the deck after the draw
    /// together with the drawn cards.
    ///
    /// The draw runs while holding the store lock so that concurrent draws on
    /// the same deck never return the same card twice.
    pub fn draw(&self, deck_id: &DeckId, count: usize) -> Result<(Deck, Vec<Card>), Error> {
        let res = self
            .store
            .update(deck_id, |deck| {
                deck.draw(count).map(|cards| (deck.clone(), cards))
            })
            .ok_or(Error::NotFound(*deck_id))?;

        let (deck, cards) = res?;
        info!(
            "Drew {} cards from deck {} remaining: {}",
            cards.len(),
            deck_id,
            deck.remaining()
        );

        Ok((deck, cards))
    }
}
