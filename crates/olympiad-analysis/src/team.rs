//! Team points per round
//!
//! A team plays one match per round, with its players split across both
//! colors. [`team_points_by_round`] sums the points each team scored with the
//! white pieces and with the black pieces in every round.
//!
//! Only (round, team) pairs with at least one game on each color are kept:
//! the white and black tallies are combined with an inner join, so a team that
//! played a round with one color only has no aggregate for that round.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{game::GameRecord, join, outcome::Color};

/// Points scored by one team in one round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRoundAggregate {
    pub round: u32,
    pub team: String,
    pub white_points: f64,
    pub black_points: f64,
    pub total_points: f64,
}

impl TeamRoundAggregate {
    #[must_use]
    pub fn points(&self, color: Color) -> f64 {
        match color {
            Color::White => self.white_points,
            Color::Black => self.black_points,
        }
    }
}

/// Points scored by one team over the whole tournament, per color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamColorTotals {
    pub team: String,
    pub white_points: f64,
    pub black_points: f64,
}

/// Sums the points scored by each side of `color`, keyed by (round, team).
fn points_by_color(games: &[GameRecord], color: Color) -> BTreeMap<(u32, &str), f64> {
    join::group_by(games, |game| (game.round(), game.team(color)))
        .into_iter()
        .map(|(key, games)| (key, games.iter().map(|game| game.score(color)).sum()))
        .collect()
}

/// Computes every team's white, black and total points per round.
///
/// The result is ordered by round, then team name.
#[must_use]
pub fn team_points_by_round(games: &[GameRecord]) -> Vec<TeamRoundAggregate> {
    let white = points_by_color(games, Color::White);
    let black = points_by_color(games, Color::Black);
    let candidates = white.len() + black.len();

    let aggregates = join::inner_join(white, black)
        .into_iter()
        .map(
            |((round, team), (white_points, black_points))| TeamRoundAggregate {
                round,
                team: team.to_owned(),
                white_points,
                black_points,
                total_points: white_points + black_points,
            },
        )
        .collect::<Vec<_>>();

    tracing::debug!(
        games = games.len(),
        aggregates = aggregates.len(),
        one_sided = candidates - 2 * aggregates.len(),
        "computed team points per round"
    );
    aggregates
}

/// Indexes aggregates by (round, team) for lookups.
#[must_use]
pub fn index_by_round_and_team(
    team_points: &[TeamRoundAggregate],
) -> BTreeMap<(u32, &str), &TeamRoundAggregate> {
    team_points
        .iter()
        .map(|points| ((points.round, points.team.as_str()), points))
        .collect()
}

/// Sums each team's per-round points by color over all rounds.
///
/// The result is ordered by team name.
#[must_use]
pub fn team_color_totals(team_points: &[TeamRoundAggregate]) -> Vec<TeamColorTotals> {
    join::group_by(team_points, |points| points.team.as_str())
        .into_iter()
        .map(|(team, rounds)| TeamColorTotals {
            team: team.to_owned(),
            white_points: rounds.iter().map(|points| points.white_points).sum(),
            black_points: rounds.iter().map(|points| points.black_points).sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_util::{games, raw_row, two_game_match};

    #[test]
    fn test_two_game_match() {
        let points = team_points_by_round(&two_game_match());
        assert_eq!(
            points,
            [
                TeamRoundAggregate {
                    round: 1,
                    team: "X".to_owned(),
                    white_points: 1.0,
                    black_points: 1.0,
                    total_points: 2.0,
                },
                TeamRoundAggregate {
                    round: 1,
                    team: "Y".to_owned(),
                    white_points: 0.0,
                    black_points: 0.0,
                    total_points: 0.0,
                },
            ]
        );
    }

    #[test]
    fn test_sums_across_boards_and_rounds() {
        let games = games(vec![
            raw_row("1.1", ("A1", "A"), ("B1", "B"), "1-0"),
            raw_row("1.2", ("B2", "B"), ("A2", "A"), "1/2-1/2"),
            raw_row("1.3", ("A3", "A"), ("B3", "B"), "1/2-1/2"),
            raw_row("1.4", ("B4", "B"), ("A4", "A"), "0-1"),
            raw_row("2.1", ("B1", "B"), ("A1", "A"), "1-0"),
            raw_row("2.2", ("A2", "A"), ("B2", "B"), "0-1"),
        ]);
        let points = team_points_by_round(&games);
        let index = index_by_round_and_team(&points);

        let a1 = index[&(1, "A")];
        assert_eq!((a1.white_points, a1.black_points, a1.total_points), (1.5, 1.5, 3.0));
        let b1 = index[&(1, "B")];
        assert_eq!((b1.white_points, b1.black_points, b1.total_points), (0.5, 0.5, 1.0));
        let a2 = index[&(2, "A")];
        assert_eq!((a2.white_points, a2.black_points, a2.total_points), (0.0, 0.0, 0.0));
        assert_eq!(index[&(2, "B")].total_points, 2.0);
    }

    #[test]
    fn test_one_colored_team_round_is_dropped() {
        let games = games(vec![
            raw_row("1.1", ("A1", "A"), ("B1", "B"), "1-0"),
            raw_row("1.2", ("A2", "A"), ("B2", "B"), "1-0"),
            raw_row("2.1", ("A1", "A"), ("B1", "B"), "1-0"),
            raw_row("2.2", ("B2", "B"), ("A2", "A"), "1-0"),
        ]);
        let points = team_points_by_round(&games);
        let keys = points
            .iter()
            .map(|points| (points.round, points.team.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(keys, [(2, "A"), (2, "B")]);
        for points in &points {
            assert!(
                games
                    .iter()
                    .any(|g| g.round() == points.round && g.team(Color::White) == points.team)
            );
            assert!(
                games
                    .iter()
                    .any(|g| g.round() == points.round && g.team(Color::Black) == points.team)
            );
        }
    }

    #[test]
    fn test_team_color_totals() {
        let games = games(vec![
            raw_row("1.1", ("A1", "A"), ("B1", "B"), "1-0"),
            raw_row("1.2", ("B2", "B"), ("A2", "A"), "1/2-1/2"),
            raw_row("2.1", ("B1", "B"), ("A1", "A"), "0-1"),
            raw_row("2.2", ("A2", "A"), ("B2", "B"), "1/2-1/2"),
        ]);
        let totals = team_color_totals(&team_points_by_round(&games));
        assert_eq!(
            totals,
            [
                TeamColorTotals {
                    team: "A".to_owned(),
                    white_points: 1.5,
                    black_points: 1.5,
                },
                TeamColorTotals {
                    team: "B".to_owned(),
                    white_points: 0.5,
                    black_points: 0.5,
                },
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(team_points_by_round(&[]).is_empty());
        assert!(team_color_totals(&[]).is_empty());
    }
}
