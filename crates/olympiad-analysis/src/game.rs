//! Game records and row normalization
//!
//! The input table holds one loosely typed row per board per round
//! ([`RawGameRow`]). [`normalize_rows`] turns those rows into typed
//! [`GameRecord`]s, dropping games that were never played and games too short
//! to be meaningful, and failing the whole batch on the first row that cannot
//! be coerced.
//!
//! # Normalization Policy
//!
//! Applied to each row, in order:
//!
//! 1. Rows with the no-result marker (`0-0`) are dropped.
//! 2. Rows whose move text has at most [`MIN_MOVES_LENGTH`] characters are
//!    dropped (forfeits and other anomalies).
//! 3. The composite round field `N.M` is split on the first `.` into the round
//!    number and the team board index.
//! 4. The board number is parsed.
//! 5. Ratings equal to [`MISSING_RATING`] become 0, other ratings are parsed.
//! 6. The result literal is parsed into a [`GameResult`].
//!
//! Scores and rating differentials are derived once, when the record is built.
//!
//! # Example
//!
//! ```
//! use olympiad_analysis::{
//!     game::{RawGameRow, normalize_rows},
//!     outcome::Color,
//! };
//!
//! let row = RawGameRow {
//!     result: "1-0".into(),
//!     moves: "1. e4 c5 2. Nf3 d6 3. d4 cxd4 4. Nxd4 Nf6".into(),
//!     round: "1.3".into(),
//!     board: "3".into(),
//!     white: "Alice".into(),
//!     black: "Bob".into(),
//!     white_team: "X".into(),
//!     black_team: "Y".into(),
//!     white_elo: "2000".into(),
//!     black_elo: "-".into(),
//!     opening: "Sicilian".into(),
//! };
//! let games = normalize_rows([row])?;
//! assert_eq!(games[0].round(), 1);
//! assert_eq!(games[0].team_board(), 3);
//! assert_eq!(games[0].elo_difference(), 2000);
//! assert_eq!(games[0].score(Color::White), 1.0);
//! # Ok::<(), olympiad_analysis::game::DataInvariantError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::outcome::{Color, GameResult, NO_RESULT, ParseGameResultError};

/// Games whose move text is at most this many characters long are discarded.
pub const MIN_MOVES_LENGTH: usize = 20;

/// Rating literal used for players without a rating.
pub const MISSING_RATING: &str = "-";

/// A row of the results table as read from storage.
///
/// Field names follow the lowercase column identifiers of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawGameRow {
    pub result: String,
    pub moves: String,
    pub round: String,
    pub board: String,
    pub white: String,
    pub black: String,
    #[serde(rename = "whiteteam")]
    pub white_team: String,
    #[serde(rename = "blackteam")]
    pub black_team: String,
    #[serde(rename = "whiteelo")]
    pub white_elo: String,
    #[serde(rename = "blackelo")]
    pub black_elo: String,
    pub opening: String,
}

impl RawGameRow {
    /// Column identifiers a results table must provide.
    pub const COLUMNS: [&'static str; 11] = [
        "result",
        "moves",
        "round",
        "board",
        "white",
        "black",
        "whiteteam",
        "blackteam",
        "whiteelo",
        "blackelo",
        "opening",
    ];

    fn elo(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white_elo,
            Color::Black => &self.black_elo,
        }
    }
}

/// A row that survived filtering but violates a required invariant.
///
/// `row` is the 1-based position of the offending row in the input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DataInvariantError {
    #[display("row {row}: unparseable round '{value}' (expected '<round>.<team board>')")]
    InvalidRound { row: usize, value: String },
    #[display("row {row}: unparseable board '{value}'")]
    InvalidBoard { row: usize, value: String },
    #[display("row {row}: unparseable {color} rating '{value}'")]
    InvalidRating {
        row: usize,
        color: Color,
        value: String,
    },
    #[display("row {row}: {source}")]
    InvalidResult {
        row: usize,
        source: ParseGameResultError,
    },
}

/// A played game with typed fields and derived scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    round: u32,
    team_board: u32,
    board: u32,
    white: String,
    black: String,
    white_team: String,
    black_team: String,
    white_elo: i32,
    black_elo: i32,
    result: GameResult,
    opening: String,
    moves: String,
    white_score: f64,
    black_score: f64,
    elo_difference: i64,
}

impl GameRecord {
    /// Builds a record from a raw row.
    ///
    /// Returns `Ok(None)` for rows the normalization policy drops.
    pub fn from_raw(row_number: usize, raw: &RawGameRow) -> Result<Option<Self>, DataInvariantError> {
        if raw.result.trim() == NO_RESULT {
            return Ok(None);
        }
        if raw.moves.chars().count() <= MIN_MOVES_LENGTH {
            return Ok(None);
        }

        let (round, team_board) =
            parse_round(&raw.round).ok_or_else(|| DataInvariantError::InvalidRound {
                row: row_number,
                value: raw.round.clone(),
            })?;
        let board = raw
            .board
            .trim()
            .parse()
            .map_err(|_| DataInvariantError::InvalidBoard {
                row: row_number,
                value: raw.board.clone(),
            })?;
        let [white_elo, black_elo] = Color::ALL.map(|color| {
            parse_rating(raw.elo(color)).ok_or_else(|| DataInvariantError::InvalidRating {
                row: row_number,
                color,
                value: raw.elo(color).to_owned(),
            })
        });
        let (white_elo, black_elo) = (white_elo?, black_elo?);
        let result = raw
            .result
            .parse::<GameResult>()
            .map_err(|source| DataInvariantError::InvalidResult {
                row: row_number,
                source,
            })?;

        Ok(Some(Self {
            round,
            team_board,
            board,
            white: raw.white.clone(),
            black: raw.black.clone(),
            white_team: raw.white_team.clone(),
            black_team: raw.black_team.clone(),
            white_elo,
            black_elo,
            result,
            opening: raw.opening.clone(),
            moves: raw.moves.clone(),
            white_score: result.white_score(),
            black_score: result.black_score(),
            elo_difference: i64::from(white_elo) - i64::from(black_elo),
        }))
    }

    /// Renders the record back into the raw row layout.
    ///
    /// Normalizing the returned row yields a record equal to `self`.
    #[must_use]
    pub fn to_raw_row(&self) -> RawGameRow {
        RawGameRow {
            result: self.result.to_string(),
            moves: self.moves.clone(),
            round: format!("{}.{}", self.round, self.team_board),
            board: self.board.to_string(),
            white: self.white.clone(),
            black: self.black.clone(),
            white_team: self.white_team.clone(),
            black_team: self.black_team.clone(),
            white_elo: self.white_elo.to_string(),
            black_elo: self.black_elo.to_string(),
            opening: self.opening.clone(),
        }
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn team_board(&self) -> u32 {
        self.team_board
    }

    #[must_use]
    pub fn board(&self) -> u32 {
        self.board
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[must_use]
    pub fn team(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white_team,
            Color::Black => &self.black_team,
        }
    }

    /// Rating of the given side, 0 when the player is unrated.
    #[must_use]
    pub fn elo(&self, color: Color) -> i32 {
        match color {
            Color::White => self.white_elo,
            Color::Black => self.black_elo,
        }
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[must_use]
    pub fn opening(&self) -> &str {
        &self.opening
    }

    #[must_use]
    pub fn moves(&self) -> &str {
        &self.moves
    }

    /// Length of the move text in characters.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.chars().count()
    }

    #[must_use]
    pub fn score(&self, color: Color) -> f64 {
        match color {
            Color::White => self.white_score,
            Color::Black => self.black_score,
        }
    }

    /// White rating minus black rating.
    #[must_use]
    pub fn elo_difference(&self) -> i64 {
        self.elo_difference
    }

    /// Rating differential seen from the given side.
    ///
    /// Positive when the player was rated above the opponent.
    #[must_use]
    pub fn relative_elo_difference(&self, color: Color) -> i64 {
        match color {
            Color::White => self.elo_difference,
            Color::Black => -self.elo_difference,
        }
    }

    /// Returns `true` if `player` sat on either side of this game.
    #[must_use]
    pub fn involves(&self, player: &str) -> bool {
        self.white == player || self.black == player
    }
}

/// Normalizes raw rows into game records.
///
/// Rows are numbered from 1 in error messages.
pub fn normalize_rows<I>(rows: I) -> Result<Vec<GameRecord>, DataInvariantError>
where
    I: IntoIterator<Item = RawGameRow>,
{
    let mut games = Vec::new();
    let mut total = 0;
    for (index, raw) in rows.into_iter().enumerate() {
        total += 1;
        if let Some(game) = GameRecord::from_raw(index + 1, &raw)? {
            games.push(game);
        }
    }
    tracing::debug!(
        total,
        kept = games.len(),
        dropped = total - games.len(),
        "normalized game rows"
    );
    Ok(games)
}

fn parse_round(value: &str) -> Option<(u32, u32)> {
    let (round, team_board) = value.trim().split_once('.')?;
    Some((round.parse().ok()?, team_board.parse().ok()?))
}

fn parse_rating(value: &str) -> Option<i32> {
    let value = value.trim();
    if value == MISSING_RATING {
        return Some(0);
    }
    value.parse().ok()
}


#[cfg(test)]
mod tests {
    use super::{test_util::*, *};

    #[test]
    fn test_derived_fields() {
        let games = two_game_match();
        let alice = &games[0];
        assert_eq!(alice.round(), 1);
        assert_eq!(alice.team_board(), 1);
        assert_eq!(alice.elo_difference(), 200);
        assert_eq!(alice.relative_elo_difference(Color::White), 200);
        assert_eq!(alice.relative_elo_difference(Color::Black), -200);
        assert_eq!(alice.score(Color::White), 1.0);
        assert_eq!(alice.score(Color::Black), 0.0);
        assert_eq!(alice.move_count(), 66);

        let carol = &games[1];
        assert_eq!(carol.elo_difference(), -200);
        assert_eq!(carol.score(Color::White), 0.0);
        assert_eq!(carol.score(Color::Black), 1.0);
        assert_eq!(carol.team(Color::Black), "X");
    }

    #[test]
    fn test_drops_unplayed_and_short_games() {
        let rows = vec![
            raw_row("1.1", ("A", "X"), ("B", "Y"), NO_RESULT),
            RawGameRow {
                moves: "1. e4 e5 2. Qh5 Nc6".to_owned(),
                ..raw_row("1.2", ("C", "X"), ("D", "Y"), "1-0")
            },
            RawGameRow {
                moves: "x".repeat(MIN_MOVES_LENGTH),
                ..raw_row("1.3", ("E", "X"), ("F", "Y"), "1-0")
            },
            RawGameRow {
                moves: "x".repeat(MIN_MOVES_LENGTH + 1),
                ..raw_row("1.4", ("G", "X"), ("H", "Y"), "1/2-1/2")
            },
        ];
        let games = games(rows);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].player(Color::White), "G");
        assert_eq!(games[0].team_board(), 4);
    }

    #[test]
    fn test_missing_rating_becomes_zero() {
        let row = RawGameRow {
            white_elo: MISSING_RATING.to_owned(),
            black_elo: "2150".to_owned(),
            ..raw_row("2.1", ("A", "X"), ("B", "Y"), "0-1")
        };
        let games = games(vec![row]);
        assert_eq!(games[0].elo(Color::White), 0);
        assert_eq!(games[0].elo_difference(), -2150);
    }

    #[test]
    fn test_extreme_ratings_do_not_overflow() {
        let row = RawGameRow {
            white_elo: i32::MAX.to_string(),
            black_elo: "-1".to_owned(),
            ..raw_row("1.1", ("A", "X"), ("B", "Y"), "1-0")
        };
        let games = games(vec![row]);
        assert_eq!(games[0].elo_difference(), i64::from(i32::MAX) + 1);
        assert_eq!(
            games[0].relative_elo_difference(Color::Black),
            -i64::from(i32::MAX) - 1
        );

        let row = RawGameRow {
            white_elo: i32::MIN.to_string(),
            black_elo: i32::MAX.to_string(),
            ..raw_row("1.1", ("A", "X"), ("B", "Y"), "0-1")
        };
        let games = test_util::games(vec![row]);
        assert_eq!(
            games[0].relative_elo_difference(Color::Black),
            i64::from(i32::MAX) - i64::from(i32::MIN)
        );
    }

    #[test]
    fn test_round_split_on_first_dot() {
        let row = raw_row("11.12", ("A", "X"), ("B", "Y"), "1-0");
        let games = games(vec![row]);
        assert_eq!(games[0].round(), 11);
        assert_eq!(games[0].team_board(), 12);
    }

    #[test]
    fn test_invalid_round_fails() {
        let rows = vec![
            raw_row("1.1", ("A", "X"), ("B", "Y"), "1-0"),
            raw_row("7", ("C", "X"), ("D", "Y"), "1-0"),
        ];
        assert_eq!(
            normalize_rows(rows),
            Err(DataInvariantError::InvalidRound {
                row: 2,
                value: "7".to_owned()
            })
        );

        let row = raw_row("1.2.3", ("A", "X"), ("B", "Y"), "1-0");
        assert!(matches!(
            normalize_rows([row]),
            Err(DataInvariantError::InvalidRound { row: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_rating_fails() {
        let row = RawGameRow {
            black_elo: "unrated".to_owned(),
            ..raw_row("1.1", ("A", "X"), ("B", "Y"), "1-0")
        };
        let err = normalize_rows([row]).unwrap_err();
        assert_eq!(
            err,
            DataInvariantError::InvalidRating {
                row: 1,
                color: Color::Black,
                value: "unrated".to_owned()
            }
        );
        assert_eq!(err.to_string(), "row 1: unparseable black rating 'unrated'");
    }

    #[test]
    fn test_invalid_board_fails() {
        let row = RawGameRow {
            board: "first".to_owned(),
            ..raw_row("1.1", ("A", "X"), ("B", "Y"), "1-0")
        };
        assert!(matches!(
            normalize_rows([row]),
            Err(DataInvariantError::InvalidBoard { row: 1, .. })
        ));
    }

    #[test]
    fn test_unrecognized_result_fails_only_for_kept_rows() {
        let short_forfeit = RawGameRow {
            moves: String::new(),
            ..raw_row("1.1", ("A", "X"), ("B", "Y"), "+/-")
        };
        assert_eq!(normalize_rows([short_forfeit]), Ok(vec![]));

        let row = raw_row("1.1", ("A", "X"), ("B", "Y"), "+/-");
        assert!(matches!(
            normalize_rows([row]),
            Err(DataInvariantError::InvalidResult { row: 1, .. })
        ));
    }

    #[test]
    fn test_renormalizing_is_a_no_op() {
        let rows = vec![
            RawGameRow {
                white_elo: MISSING_RATING.to_owned(),
                ..raw_row("3.2", ("A", "X"), ("B", "Y"), "1/2-1/2")
            },
            raw_row("1.1", ("C", "Y"), ("D", "X"), "0-1"),
            raw_row("1.2", ("E", "Y"), ("F", "X"), NO_RESULT),
        ];
        let first = games(rows);
        let second = games(first.iter().map(GameRecord::to_raw_row).collect());
        assert_eq!(first, second);
    }
}
