// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deckhand playing cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use deckhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.code(), "AH");
//! assert_eq!(Card::from_code("ah"), Some(ah));
//! ```
//!
//! and a [Deck] type that is built from a [Selection] of cards, optionally
//! shuffled, and cards are drawn from:
//!
//! ```
//! # use deckhand_cards::{Deck, Selection};
//! let mut deck = Deck::new(false, Selection::parse("AS,KD,AC,2C,KH"));
//! assert_eq!(deck.remaining(), 5);
//!
//! let cards = deck.draw(2).unwrap();
//! assert_eq!(cards[0].code(), "AS");
//! assert_eq!(cards[1].code(), "KD");
//! assert_eq!(deck.remaining(), 3);
//!
//! // Not enough cards, the deck is unchanged.
//! assert!(deck.draw(4).is_err());
//! assert_eq!(deck.remaining(), 3);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DeckId, DrawError, ParseDeckIdError, Selection};
