// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing cards definitions.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A playing card.
///
/// A card is identified by its two characters code made of the first character
/// of the rank value and the first character of the suit name:
///
/// ```
/// # use deckhand_cards::{Card, Rank, Suit};
/// assert_eq!(Card::new(Rank::Ace, Suit::Spades).code(), "AS");
/// assert_eq!(Card::new(Rank::Ten, Suit::Clubs).code(), "1C");
/// ```
///
/// Cards serialize as `{"value": "ACE", "suit": "SPADES", "code": "AS"}`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "CardRepr", from = "CardRepr")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card code, for example `KD` for the king of diamonds.
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.rank.code_char());
        code.push(self.suit.code_char());
        code
    }

    /// Finds the first card in canonical order whose code matches `code`.
    ///
    /// The code is upper cased with Unicode rules before comparing, returns
    /// None if no card matches.
    pub fn from_code(code: &str) -> Option<Card> {
        let code = code.to_uppercase();
        Self::all().find(|card| card.code() == code)
    }

    /// Returns all cards in canonical order, suits major and ranks minor.
    pub fn all() -> impl Iterator<Item = Card> {
        Suit::suits().flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.code_char(), self.suit.code_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// The serialized form of a card.
#[derive(Clone, Serialize, Deserialize)]
struct CardRepr {
    value: Rank,
    suit: Suit,
    #[serde(default)]
    code: String,
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        CardRepr {
            value: card.rank,
            suit: card.suit,
            code: card.code(),
        }
    }
}

impl From<CardRepr> for Card {
    fn from(repr: CardRepr) -> Self {
        // The code is derived from rank and suit.
        Card::new(repr.value, repr.suit)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Two
    #[serde(rename = "2")]
    Two = 0,
    /// Three
    #[serde(rename = "3")]
    Three,
    /// Four
    #[serde(rename = "4")]
    Four,
    /// Five
    #[serde(rename = "5")]
    Five,
    /// Six
    #[serde(rename = "6")]
    Six,
    /// Seven
    #[serde(rename = "7")]
    Seven,
    /// Eight
    #[serde(rename = "8")]
    Eight,
    /// Nine
    #[serde(rename = "9")]
    Nine,
    /// Ten
    #[serde(rename = "10")]
    Ten,
    /// Jack
    #[serde(rename = "JACK")]
    Jack,
    /// Queen
    #[serde(rename = "QUEEN")]
    Queen,
    /// King
    #[serde(rename = "KING")]
    King,
    /// Ace
    #[serde(rename = "ACE")]
    Ace,
}

impl Rank {
    /// Returns all ranks in canonical order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value as shown to clients.
    pub fn value(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            Rank::Ace => "ACE",
        }
    }

    /// The first character of the rank value, ten maps to `1`.
    fn code_char(&self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => '1',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Hearts suit.
    Hearts,
}

impl Suit {
    /// Returns all suits in canonical order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts].into_iter()
    }

    /// The suit name as shown to clients.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Spades => "SPADES",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
            Suit::Hearts => "HEARTS",
        }
    }

    fn code_char(&self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
