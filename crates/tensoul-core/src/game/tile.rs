use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromRepr, IntoStaticStr)]
#[repr(u8)]
pub enum Suit {
    #[strum(serialize = "m")]
    Man = 1,
    #[strum(serialize = "p")]
    Pin = 2,
    #[strum(serialize = "s")]
    Sou = 3,
    #[strum(serialize = "z")]
    Honor = 4,
}

impl Suit {
    pub fn max_rank(&self) -> u8 {
        match self {
            Self::Honor => 7,
            _ => 9,
        }
    }

    pub fn letter(&self) -> &'static str {
        self.into()
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'm' => Some(Self::Man),
            'p' => Some(Self::Pin),
            's' => Some(Self::Sou),
            'z' => Some(Self::Honor),
            _ => None,
        }
    }
}

/// A single tile.
///
/// Codes follow the tenhou numbering: `11..=19` man, `21..=29` pin,
/// `31..=39` sou, `41..=47` honors (E S W N, haku hatsu chun) and
/// `51..=53` for the red fives of man, pin and sou.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "TileRepr", into = "u8")]
pub struct Tile {
    suit: Suit,
    rank: u8,
    red: bool,
}

impl Tile {
    /// Build a plain (non-red) tile. The rank is not validated.
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            red: false,
        }
    }

    /// Red five of a numbered suit.
    pub const fn red_five(suit: Suit) -> Self {
        Self {
            suit,
            rank: 5,
            red: true,
        }
    }

    pub fn parse(code: u8) -> Result<Self> {
        if (51..=53).contains(&code) {
            let suit = Suit::from_repr(code - 50).ok_or(Error::InvalidTile(code))?;
            return Ok(Self::red_five(suit));
        }

        let suit = Suit::from_repr(code / 10).ok_or(Error::InvalidTile(code))?;
        let rank = code % 10;
        if rank == 0 || rank > suit.max_rank() {
            return Err(Error::InvalidTile(code));
        }
        Ok(Self::new(suit, rank))
    }

    pub fn code(&self) -> u8 {
        if self.red {
            50 + self.suit as u8
        } else {
            self.suit as u8 * 10 + self.rank
        }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn is_red(&self) -> bool {
        self.red
    }

    /// Strip the red-five flag.
    pub fn deaka(&self) -> Self {
        Self {
            red: false,
            ..*self
        }
    }

    /// Compare ignoring the red-five flag.
    pub fn same_kind(&self, other: &Tile) -> bool {
        self.deaka() == other.deaka()
    }

    pub fn is_wind(&self) -> bool {
        self.suit == Suit::Honor && (1..=4).contains(&self.rank)
    }

    pub fn is_dragon(&self) -> bool {
        self.suit == Suit::Honor && (5..=7).contains(&self.rank)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = if self.red { 0 } else { self.rank };
        write!(f, "{}{}", rank, self.suit.letter())
    }
}

/// Upstream notation: `"1m"`, `"7z"`, `"0p"` for the red five.
impl FromStr for Tile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidTileNotation(s.to_string());

        let mut chars = s.chars();
        let (Some(digit), Some(letter), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let rank = digit.to_digit(10).ok_or_else(invalid)? as u8;
        let suit = Suit::from_letter(letter).ok_or_else(invalid)?;

        match (suit, rank) {
            (Suit::Honor, 0) => Err(invalid()),
            (_, 0) => Ok(Self::red_five(suit)),
            _ if rank > suit.max_rank() => Err(invalid()),
            _ => Ok(Self::new(suit, rank)),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TileRepr {
    Code(u8),
    Notation(String),
}

impl TryFrom<TileRepr> for Tile {
    type Error = Error;

    fn try_from(repr: TileRepr) -> Result<Self> {
        match repr {
            TileRepr::Code(code) => Self::parse(code),
            TileRepr::Notation(s) => s.parse(),
        }
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.code()
    }
}
