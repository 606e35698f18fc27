// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! In memory decks store.
use ahash::AHashMap;
use parking_lot::Mutex;
use std::sync::Arc;

use deckhand_cards::{Deck, DeckId};

/// Store for the latest state of each deck.
///
/// The store is a handle that can be cloned and shared by all request
/// handlers, all clones refer to the same decks. Decks live until the process
/// exits.
#[derive(Debug, Clone, Default)]
pub struct DeckStore {
    decks: Arc<Mutex<AHashMap<DeckId, Deck>>>,
}

impl DeckStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a deck replacing any deck with the same id.
    pub fn save(&self, deck: Deck) {
        self.decks.lock().insert(deck.id(), deck);
    }

    /// Gets a copy of a deck.
    pub fn get(&self, deck_id: &DeckId) -> Option<Deck> {
        self.decks.lock().get(deck_id).cloned()
    }

    /// Updates a deck in place.
    ///
    /// The store lock is held while `f` runs so that no other caller can read
    /// or write the deck until the update completes. Returns None if there is
    /// no deck with the given id.
    pub fn update<F, R>(&self, deck_id: &DeckId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Deck) -> R,
    {
        self.decks.lock().get_mut(deck_id).map(f)
    }
}
