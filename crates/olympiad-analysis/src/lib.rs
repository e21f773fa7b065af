//! Results analytics for team chess olympiads
//!
//! This crate turns a CSV table of olympiad games into per-team, per-player,
//! per-opening and per-round statistics.
//!
//! # Overview
//!
//! Every analysis starts from the same normalized table and derives its
//! aggregates as pure functions of it:
//!
//! 1. **Load Games** ([`load::load_games`]): Read the CSV table and normalize each row into
//!    a [`game::GameRecord`], dropping unplayed and too-short games
//! 2. **Team Points** ([`team::team_points_by_round`]): Sum the points each team scored per
//!    round with each color
//! 3. **Enrich Games** ([`enrich::enrich_games`]): Attach both teams' round totals to every
//!    game and weigh each player's score by how much it mattered to the team
//! 4. **Player Totals** ([`player::player_aggregates`]): Combine per-color tallies into one
//!    record per player
//!
//! Independent of the team stages, [`opening::opening_aggregates`] summarizes outcomes per
//! opening and [`breakdown`] counts outcomes per round and per board.
//!
//! [`report::TournamentReport`] runs the whole pipeline once and answers the
//! filtered queries on top of it. [`cache::GameTableCache`] avoids reloading a
//! table that has not changed on disk.
//!
//! The relational steps (grouping, inner, outer and left joins) live in [`join`]
//! and are ordered by key, so every output is deterministic.
//!
//! # Examples
//!
//! ```no_run
//! use olympiad_analysis::{cache::GameTableCache, report::TournamentReport};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let mut cache = GameTableCache::new();
//! let games = cache.load("olympiad.csv")?;
//! let report = TournamentReport::new(games);
//!
//! for player in report.players_for_team("Norway") {
//!     println!("{}: {:.2}", player.player_name, player.total_value_score);
//! }
//! for opening in report.openings(100) {
//!     println!("{}: {:.1}% draws", opening.opening, opening.draw_ratio * 100.0);
//! }
//! # Ok(())
//! # }
//! ```

pub mod breakdown;
pub mod cache;
pub mod enrich;
pub mod game;
pub mod join;
pub mod load;
pub mod opening;
pub mod outcome;
pub mod player;
pub mod report;
pub mod team;

pub use self::{
    enrich::enrich_games, load::load_games, opening::opening_aggregates,
    player::{player_aggregates, players_for_team},
    team::team_points_by_round,
};
