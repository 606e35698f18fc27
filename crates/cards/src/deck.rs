// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck types.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use uuid::Uuid;

use crate::Card;

/// A unique deck identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(Uuid);

impl DeckId {
    /// Create a new unique deck id.
    pub fn new_id() -> DeckId {
        DeckId(Uuid::new_v4())
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Error returned when parsing an invalid deck id.
#[derive(Debug, Error)]
#[error("invalid deck id: {0}")]
pub struct ParseDeckIdError(#[from] uuid::Error);

impl FromStr for DeckId {
    type Err = ParseDeckIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DeckId(Uuid::parse_str(s)?))
    }
}

/// Error returned by [Deck::draw].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has fewer cards than requested.
    #[error("not enough cards remaining in the deck (requested {requested}, remaining {remaining})")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// The cards a deck is built from.
///
/// Selections are lenient: codes that don't match any card are dropped and
/// collected in [Selection::unmatched], so the resulting deck may have fewer
/// cards than the number of codes requested. Callers must treat the deck size
/// as authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// The full 52 cards deck.
    #[default]
    Full,
    /// A subset of cards in the requested order.
    Subset {
        /// The matched cards.
        cards: Vec<Card>,
        /// The codes that didn't match any card.
        unmatched: Vec<String>,
    },
}

impl Selection {
    /// Parses a comma separated list of card codes.
    ///
    /// An empty string selects the full deck. Codes are matched ignoring case,
    /// duplicates are kept and tokens are not trimmed.
    pub fn parse(codes: &str) -> Self {
        if codes.is_empty() {
            return Selection::Full;
        }

        let mut cards = Vec::new();
        let mut unmatched = Vec::new();
        for code in codes.split(',') {
            match Card::from_code(code) {
                Some(card) => cards.push(card),
                None => unmatched.push(code.to_string()),
            }
        }

        Selection::Subset { cards, unmatched }
    }

    /// The codes that didn't match any card.
    pub fn unmatched(&self) -> &[String] {
        match self {
            Selection::Full => &[],
            Selection::Subset { unmatched, .. } => unmatched,
        }
    }

    fn into_cards(self) -> Vec<Card> {
        match self {
            Selection::Full => Deck::canonical_cards(),
            Selection::Subset { cards, .. } => cards,
        }
    }
}

/// A deck of cards cards are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    #[serde(rename = "deck_id")]
    id: DeckId,
    shuffled: bool,
    remaining: usize,
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a new deck using the thread random generator for shuffling.
    pub fn new(shuffled: bool, selection: Selection) -> Self {
        Self::new_with_rng(shuffled, selection, &mut rand::rng())
    }

    /// Creates a new deck with the given random generator.
    pub fn new_with_rng<R>(shuffled: bool, selection: Selection, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut cards = selection.into_cards();
        if shuffled {
            cards.shuffle(rng);
        }

        Self {
            id: DeckId::new_id(),
            shuffled,
            remaining: cards.len(),
            cards,
        }
    }

    /// The 52 cards ordered by suit and then rank.
    pub fn canonical_cards() -> Vec<Card> {
        Card::all().collect()
    }

    /// This deck id.
    pub fn id(&self) -> DeckId {
        self.id
    }

    /// Checks if the deck was shuffled when created.
    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Number of cards left in the deck.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards left in the deck in draw order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Draws `count` cards from the front of the deck.
    ///
    /// If the deck has fewer than `count` cards it is left unchanged.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        if count > self.remaining {
            return Err(DrawError::NotEnoughCards {
                requested: count,
                remaining: self.remaining,
            });
        }

        let drawn = self.cards.drain(..count).collect::<Vec<_>>();
        self.remaining -= count;

        Ok(drawn)
    }
}
