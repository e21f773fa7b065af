//! Player totals
//!
//! Games are tallied per color first (points, games, value score, mean
//! relative rating differential) and the two tallies are combined with an
//! outer join on the player name. A player who only ever sat on one side has
//! no tally for the other; totals count that side as zero, while its mean
//! rating differential stays absent.

use std::collections::{BTreeMap, BTreeSet};

use olympiad_stats::descriptive::DescriptiveStats;
use serde::Serialize;

use crate::{enrich::EnrichedGameRecord, join, outcome::Color};

/// A player's tally for the games played with one color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStats {
    pub points: f64,
    pub games: usize,
    pub value_score: f64,
    pub mean_relative_elo_difference: f64,
}

impl ColorStats {
    #[expect(clippy::cast_precision_loss)]
    fn from_games(games: &[&EnrichedGameRecord], color: Color) -> Option<Self> {
        let elo = DescriptiveStats::new(
            games
                .iter()
                .map(|game| game.game.relative_elo_difference(color) as f64),
        )?;
        Some(Self {
            points: games.iter().map(|game| game.game.score(color)).sum(),
            games: games.len(),
            value_score: games.iter().map(|game| game.value_score(color)).sum(),
            mean_relative_elo_difference: elo.mean,
        })
    }
}

/// Tournament totals for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerAggregate {
    pub player_name: String,
    pub white: Option<ColorStats>,
    pub black: Option<ColorStats>,
    pub total_points: f64,
    pub total_games: usize,
    pub total_value_score: f64,
}

impl PlayerAggregate {
    fn new(player_name: String, white: Option<ColorStats>, black: Option<ColorStats>) -> Self {
        let sum = |field: fn(&ColorStats) -> f64| {
            white.as_ref().map_or(0.0, field) + black.as_ref().map_or(0.0, field)
        };
        let total_points = sum(|stats| stats.points);
        let total_value_score = sum(|stats| stats.value_score);
        let total_games = white.as_ref().map_or(0, |stats| stats.games)
            + black.as_ref().map_or(0, |stats| stats.games);
        Self {
            player_name,
            white,
            black,
            total_points,
            total_games,
            total_value_score,
        }
    }

    #[must_use]
    pub fn color(&self, color: Color) -> Option<&ColorStats> {
        match color {
            Color::White => self.white.as_ref(),
            Color::Black => self.black.as_ref(),
        }
    }

    /// Points scored with `color`, zero if the player never had that color.
    #[must_use]
    pub fn points(&self, color: Color) -> f64 {
        self.color(color).map_or(0.0, |stats| stats.points)
    }

    /// Games played with `color`, zero if the player never had that color.
    #[must_use]
    pub fn games(&self, color: Color) -> usize {
        self.color(color).map_or(0, |stats| stats.games)
    }

    #[must_use]
    pub fn value_score(&self, color: Color) -> f64 {
        self.color(color).map_or(0.0, |stats| stats.value_score)
    }

    /// Mean rating differential with `color`, absent if the player never had that color.
    #[must_use]
    pub fn mean_relative_elo_difference(&self, color: Color) -> Option<f64> {
        self.color(color).map(|stats| stats.mean_relative_elo_difference)
    }
}

fn stats_by_player(enriched: &[EnrichedGameRecord], color: Color) -> BTreeMap<&str, ColorStats> {
    join::group_by(enriched, |game| game.game.player(color))
        .into_iter()
        .filter_map(|(player, games)| Some((player, ColorStats::from_games(&games, color)?)))
        .collect()
}

/// Computes totals for every player, ordered by player name.
#[must_use]
pub fn player_aggregates(enriched: &[EnrichedGameRecord]) -> Vec<PlayerAggregate> {
    let white = stats_by_player(enriched, Color::White);
    let black = stats_by_player(enriched, Color::Black);

    let players = join::outer_join(white, black)
        .into_iter()
        .map(|(player, joined)| {
            let (white, black) = joined.into_parts();
            PlayerAggregate::new(player.to_owned(), white, black)
        })
        .collect::<Vec<_>>();
    tracing::debug!(players = players.len(), "computed player aggregates");
    players
}

fn by_value_score_desc(a: &PlayerAggregate, b: &PlayerAggregate) -> std::cmp::Ordering {
    b.total_value_score
        .total_cmp(&a.total_value_score)
        .then_with(|| a.player_name.cmp(&b.player_name))
}

/// Players who sat for `team` in any game, best value score first.
///
/// The roster is every distinct player seen on `team`'s side with either
/// color; roster entries without an aggregate are skipped.
#[must_use]
pub fn players_for_team(
    enriched: &[EnrichedGameRecord],
    players: &[PlayerAggregate],
    team: &str,
) -> Vec<PlayerAggregate> {
    let roster = enriched
        .iter()
        .flat_map(|game| {
            Color::ALL.map(|color| (game.game.team(color), game.game.player(color)))
        })
        .filter(|(player_team, _)| *player_team == team)
        .map(|(_, player)| player)
        .collect::<BTreeSet<_>>();
    let by_name = players
        .iter()
        .map(|player| (player.player_name.as_str(), player))
        .collect::<BTreeMap<_, _>>();

    let mut team_players = join::left_join(&roster, &by_name, |player| *player)
        .into_iter()
        .filter_map(|(_, player)| player.map(|player| (*player).clone()))
        .collect::<Vec<_>>();
    team_players.sort_by(by_value_score_desc);
    team_players
}

/// The `limit` players with the highest total value score.
#[must_use]
pub fn most_valuable_players(players: &[PlayerAggregate], limit: usize) -> Vec<PlayerAggregate> {
    let mut ranked = players.to_vec();
    ranked.sort_by(by_value_score_desc);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        enrich::enrich_games,
        game::{
            GameRecord, RawGameRow,
            test_util::{games, raw_row, two_game_match},
        },
        team::team_points_by_round,
    };

    fn enriched(games: &[GameRecord]) -> Vec<EnrichedGameRecord> {
        enrich_games(games, &team_points_by_round(games))
    }

    fn find<'a>(players: &'a [PlayerAggregate], name: &str) -> &'a PlayerAggregate {
        players.iter().find(|p| p.player_name == name).unwrap()
    }

    #[test]
    fn test_two_game_match() {
        let players = player_aggregates(&enriched(&two_game_match()));
        let names = players
            .iter()
            .map(|p| p.player_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Alice", "Bob", "Carol", "Dan"]);

        let alice = find(&players, "Alice");
        assert_eq!(alice.total_points, 1.0);
        assert_eq!(alice.total_games, 1);
        assert_eq!(alice.total_value_score, 0.5);
        assert_eq!(alice.mean_relative_elo_difference(Color::White), Some(200.0));
        assert_eq!(alice.black, None);
        assert_eq!(alice.points(Color::Black), 0.0);
        assert_eq!(alice.mean_relative_elo_difference(Color::Black), None);

        let dan = find(&players, "Dan");
        assert_eq!(dan.white, None);
        assert_eq!(dan.total_points, 1.0);
        assert_eq!(dan.mean_relative_elo_difference(Color::Black), Some(200.0));
    }

    #[test]
    fn test_totals_combine_both_colors() {
        let games = games(vec![
            RawGameRow {
                white_elo: "2500".to_owned(),
                black_elo: "2400".to_owned(),
                ..raw_row("1.1", ("Magnus", "N"), ("B1", "B"), "1/2-1/2")
            },
            raw_row("1.2", ("B2", "B"), ("N2", "N"), "1-0"),
            RawGameRow {
                white_elo: "2300".to_owned(),
                black_elo: "2500".to_owned(),
                ..raw_row("2.1", ("B1", "B"), ("Magnus", "N"), "0-1")
            },
            raw_row("2.2", ("N2", "N"), ("B2", "B"), "1-0"),
            RawGameRow {
                white_elo: "2500".to_owned(),
                black_elo: "2200".to_owned(),
                ..raw_row("3.1", ("Magnus", "N"), ("B1", "B"), "1-0")
            },
            raw_row("3.2", ("B2", "B"), ("N2", "N"), "1-0"),
        ]);
        let players = player_aggregates(&enriched(&games));
        let magnus = find(&players, "Magnus");

        assert_eq!(magnus.games(Color::White), 2);
        assert_eq!(magnus.games(Color::Black), 1);
        assert_eq!(magnus.total_games, 3);
        assert_eq!(magnus.points(Color::White), 1.5);
        assert_eq!(magnus.points(Color::Black), 1.0);
        assert_eq!(magnus.total_points, 2.5);
        assert_eq!(magnus.mean_relative_elo_difference(Color::White), Some(200.0));
        assert_eq!(magnus.mean_relative_elo_difference(Color::Black), Some(200.0));
        // Team N scored 0.5, 2 and 1 points in rounds 1 to 3.
        assert_eq!(magnus.value_score(Color::White), 0.0);
        assert_eq!(magnus.value_score(Color::Black), 0.5);
        assert_eq!(magnus.total_value_score, 0.5);

        for player in &players {
            assert_eq!(
                player.total_points,
                player.points(Color::White) + player.points(Color::Black)
            );
            assert_eq!(
                player.total_games,
                player.games(Color::White) + player.games(Color::Black)
            );
        }
    }

    #[test]
    fn test_players_for_team_sorted_by_value_score() {
        let games = games(vec![
            raw_row("1.1", ("A1", "A"), ("B1", "B"), "1-0"),
            raw_row("1.2", ("B2", "B"), ("A2", "A"), "1/2-1/2"),
            raw_row("1.3", ("A3", "A"), ("B3", "B"), "1/2-1/2"),
            raw_row("1.4", ("B4", "B"), ("A4", "A"), "0-1"),
        ]);
        let enriched = enriched(&games);
        let players = player_aggregates(&enriched);

        let team_a = players_for_team(&enriched, &players, "A");
        let names = team_a
            .iter()
            .map(|p| (p.player_name.as_str(), p.total_value_score))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [("A1", 1.25), ("A4", 1.25), ("A2", 0.25), ("A3", 0.25)]
        );

        assert!(players_for_team(&enriched, &players, "C").is_empty());
    }

    #[test]
    fn test_most_valuable_players() {
        let games = games(vec![
            raw_row("1.1", ("A1", "A"), ("B1", "B"), "1-0"),
            raw_row("1.2", ("B2", "B"), ("A2", "A"), "1/2-1/2"),
            raw_row("1.3", ("A3", "A"), ("B3", "B"), "1/2-1/2"),
            raw_row("1.4", ("B4", "B"), ("A4", "A"), "0-1"),
        ]);
        let players = player_aggregates(&enriched(&games));
        let top = most_valuable_players(&players, 2);
        let names = top
            .iter()
            .map(|p| p.player_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["A1", "A4"]);
        assert_eq!(most_valuable_players(&players, 100).len(), players.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(player_aggregates(&[]).is_empty());
    }
}
