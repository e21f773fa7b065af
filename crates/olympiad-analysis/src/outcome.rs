//! Game outcomes, board colors and outcome tallies
//!
//! [`GameResult`] is the typed form of the result literal found in the input
//! table. Scoring follows the usual chess convention: a win is worth one point,
//! a draw half a point to each side.
//!
//! | literal   | white score | black score |
//! |-----------|-------------|-------------|
//! | `1-0`     | 1           | 0           |
//! | `1/2-1/2` | 0.5         | 0.5         |
//! | `0-1`     | 0           | 1           |
//!
//! The no-result marker [`NO_RESULT`] (`0-0`) is deliberately not a
//! [`GameResult`]: such rows never become game records.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Result literal of a game that was not played.
pub const NO_RESULT: &str = "0-0";

/// Outcome of a played game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum GameResult {
    #[display("1-0")]
    #[serde(rename = "1-0")]
    WhiteWin,
    #[display("1/2-1/2")]
    #[serde(rename = "1/2-1/2")]
    Draw,
    #[display("0-1")]
    #[serde(rename = "0-1")]
    BlackWin,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unrecognized game result '{literal}'")]
pub struct ParseGameResultError {
    pub literal: String,
}

impl FromStr for GameResult {
    type Err = ParseGameResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1-0" => Ok(Self::WhiteWin),
            "1/2-1/2" => Ok(Self::Draw),
            "0-1" => Ok(Self::BlackWin),
            other => Err(ParseGameResultError {
                literal: other.to_owned(),
            }),
        }
    }
}

impl GameResult {
    pub const ALL: [Self; 3] = [Self::WhiteWin, Self::Draw, Self::BlackWin];

    /// Points scored by the given side.
    #[must_use]
    pub fn score(self, color: Color) -> f64 {
        match (self, color) {
            (Self::WhiteWin, Color::White) | (Self::BlackWin, Color::Black) => 1.0,
            (Self::Draw, _) => 0.5,
            (Self::WhiteWin, Color::Black) | (Self::BlackWin, Color::White) => 0.0,
        }
    }

    #[must_use]
    pub fn white_score(self) -> f64 {
        self.score(Color::White)
    }

    #[must_use]
    pub fn black_score(self) -> f64 {
        self.score(Color::Black)
    }
}

/// Side of the board a player sat on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[display("white")]
    White,
    #[display("black")]
    Black,
}

impl Color {
    pub const ALL: [Self; 2] = [Self::White, Self::Black];

    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

/// Number of games per outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCounts {
    pub white_wins: usize,
    pub draws: usize,
    pub black_wins: usize,
}

impl ResultCounts {
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = GameResult>,
    {
        let mut counts = Self::default();
        for result in results {
            counts.record(result);
        }
        counts
    }

    pub fn record(&mut self, result: GameResult) {
        *self.count_mut(result) += 1;
    }

    #[must_use]
    pub fn count(&self, result: GameResult) -> usize {
        match result {
            GameResult::WhiteWin => self.white_wins,
            GameResult::Draw => self.draws,
            GameResult::BlackWin => self.black_wins,
        }
    }

    fn count_mut(&mut self, result: GameResult) -> &mut usize {
        match result {
            GameResult::WhiteWin => &mut self.white_wins,
            GameResult::Draw => &mut self.draws,
            GameResult::BlackWin => &mut self.black_wins,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.white_wins + self.draws + self.black_wins
    }

    /// Share of games that ended with `result`, or `None` when no games were counted.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn ratio(&self, result: GameResult) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.count(result) as f64 / total as f64)
    }
}
