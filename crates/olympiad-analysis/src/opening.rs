//! Outcome ratios and rating differentials per opening
//!
//! Games are pivoted by opening and result into outcome counts, from which the
//! white-win, draw and black-win ratios follow. The mean and median rating
//! differential of each opening's games are joined onto that table, so the
//! ratios can be read against how lopsided the pairings were.

use std::collections::BTreeMap;

use olympiad_stats::descriptive::DescriptiveStats;
use serde::Serialize;

use crate::{
    game::GameRecord,
    join,
    outcome::{GameResult, ResultCounts},
};

/// Outcome statistics of one opening.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningAggregate {
    pub opening: String,
    pub counts: ResultCounts,
    pub total_games: usize,
    pub white_win_ratio: f64,
    pub draw_ratio: f64,
    pub black_win_ratio: f64,
    pub elo_difference_mean: Option<f64>,
    pub elo_difference_median: Option<f64>,
}

/// Computes outcome statistics for every opening, ordered by opening name.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn opening_table(games: &[GameRecord]) -> Vec<OpeningAggregate> {
    let by_opening = join::group_by(games, GameRecord::opening);
    let counts = by_opening
        .iter()
        .map(|(opening, games)| {
            let counts = ResultCounts::from_results(games.iter().map(|game| game.result()));
            (*opening, counts)
        })
        .collect::<BTreeMap<_, _>>();
    let elo_stats = by_opening
        .iter()
        .filter_map(|(opening, games)| {
            let stats = DescriptiveStats::new(
                games
                    .iter()
                    .map(|game| game.elo_difference() as f64),
            )?;
            Some((*opening, stats))
        })
        .collect::<BTreeMap<_, _>>();

    let rows = counts.iter().collect::<Vec<_>>();
    join::left_join(&rows, &elo_stats, |(opening, _)| **opening)
        .into_iter()
        .map(|(&(opening, counts), elo)| {
            let ratio = |result| counts.ratio(result).unwrap_or(0.0);
            OpeningAggregate {
                opening: (*opening).to_owned(),
                counts: *counts,
                total_games: counts.total(),
                white_win_ratio: ratio(GameResult::WhiteWin),
                draw_ratio: ratio(GameResult::Draw),
                black_win_ratio: ratio(GameResult::BlackWin),
                elo_difference_mean: elo.map(|stats| stats.mean),
                elo_difference_median: elo.map(|stats| stats.median),
            }
        })
        .collect()
}

/// Openings played in more than `min_games` games, most played first.
///
/// Openings with the same number of games are ordered by name. An empty
/// result is valid.
#[must_use]
pub fn opening_aggregates(games: &[GameRecord], min_games: usize) -> Vec<OpeningAggregate> {
    let mut openings = opening_table(games)
        .into_iter()
        .filter(|opening| opening.total_games > min_games)
        .collect::<Vec<_>>();
    openings.sort_by(|a, b| {
        b.total_games
            .cmp(&a.total_games)
            .then_with(|| a.opening.cmp(&b.opening))
    });
    tracing::debug!(
        min_games,
        openings = openings.len(),
        "selected opening aggregates"
    );
    openings
}

/// Games played with `opening`, in input order.
#[must_use]
pub fn games_for_opening<'a>(games: &'a [GameRecord], opening: &str) -> Vec<&'a GameRecord> {
    games.iter().filter(|game| game.opening() == opening).collect()
}
