//! Per-game value scores
//!
//! Each game is annotated with both teams' points for its round, and each
//! side's result is turned into a value score: a player's contribution
//! measured against how the whole team did that round.
//!
//! A team match is played on four boards, so two points is the break-even
//! result ([`EXPECTED_TEAM_POINTS`]). Given a side's score `s` and its team's
//! round total `T`, branches are evaluated in this order:
//!
//! | condition              | value score     |
//! |------------------------|-----------------|
//! | `T > 2.0`              | `2 * s - T / 4` |
//! | `\|T - 2.0\| < 0.1`    | `s - 0.5`       |
//! | otherwise              | `0`             |
//!
//! A side whose team has no aggregate for the round scores 0.

use serde::Serialize;

use crate::{
    game::GameRecord,
    outcome::Color,
    team::{self, TeamRoundAggregate},
};

/// Team points per round at which a match is neither won nor lost.
pub const EXPECTED_TEAM_POINTS: f64 = 2.0;

/// Distance from [`EXPECTED_TEAM_POINTS`] still treated as break-even.
pub const EXPECTED_TEAM_POINTS_TOLERANCE: f64 = 0.1;

/// Value of a side's `score` given its team's round total.
#[must_use]
pub fn value_score(score: f64, team_total: f64) -> f64 {
    if team_total > EXPECTED_TEAM_POINTS {
        2.0 * score - team_total / 4.0
    } else if (team_total - EXPECTED_TEAM_POINTS).abs() < EXPECTED_TEAM_POINTS_TOLERANCE {
        score - 0.5
    } else {
        0.0
    }
}

/// A game annotated with both teams' round points and value scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedGameRecord {
    pub game: GameRecord,
    pub white_team_points: Option<TeamRoundAggregate>,
    pub black_team_points: Option<TeamRoundAggregate>,
    pub white_value_score: f64,
    pub black_value_score: f64,
}

impl EnrichedGameRecord {
    #[must_use]
    pub fn team_points(&self, color: Color) -> Option<&TeamRoundAggregate> {
        match color {
            Color::White => self.white_team_points.as_ref(),
            Color::Black => self.black_team_points.as_ref(),
        }
    }

    /// Round total of the given side's team, if it has an aggregate.
    #[must_use]
    pub fn team_total_points(&self, color: Color) -> Option<f64> {
        self.team_points(color).map(|points| points.total_points)
    }

    #[must_use]
    pub fn value_score(&self, color: Color) -> f64 {
        match color {
            Color::White => self.white_value_score,
            Color::Black => self.black_value_score,
        }
    }
}

/// Attaches team round points to every game and computes value scores.
///
/// Games keep their input order.
#[must_use]
pub fn enrich_games(
    games: &[GameRecord],
    team_points: &[TeamRoundAggregate],
) -> Vec<EnrichedGameRecord> {
    let index = team::index_by_round_and_team(team_points);
    let lookup = |game: &GameRecord, color: Color| {
        index
            .get(&(game.round(), game.team(color)))
            .map(|points| (*points).clone())
    };

    let enriched = games
        .iter()
        .map(|game| {
            let white_team_points = lookup(game, Color::White);
            let black_team_points = lookup(game, Color::Black);
            let side_value = |color: Color, points: Option<&TeamRoundAggregate>| {
                points.map_or(0.0, |points| {
                    value_score(game.score(color), points.total_points)
                })
            };
            EnrichedGameRecord {
                white_value_score: side_value(Color::White, white_team_points.as_ref()),
                black_value_score: side_value(Color::Black, black_team_points.as_ref()),
                game: game.clone(),
                white_team_points,
                black_team_points,
            }
        })
        .collect::<Vec<_>>();

    let unmatched = enriched
        .iter()
        .flat_map(|game| Color::ALL.map(|color| game.team_points(color)))
        .filter(Option::is_none)
        .count();
    tracing::debug!(
        games = enriched.len(),
        unmatched_sides = unmatched,
        "enriched games with team points"
    );
    enriched
}

/// Games where `player` sat on either side, in input order.
#[must_use]
pub fn games_for_player<'a>(
    enriched: &'a [EnrichedGameRecord],
    player: &str,
) -> Vec<&'a EnrichedGameRecord> {
    enriched
        .iter()
        .filter(|game| game.game.involves(player))
        .collect()
}
