//! All derived tables of one tournament
//!
//! [`TournamentReport`] runs the team → enrichment → player stages once for a
//! loaded table and answers the filtered queries a front end needs. Queries
//! return fresh values and never modify the report.

use std::{collections::BTreeSet, sync::Arc};

use crate::{
    breakdown::{self, BoardResults, RoundResults},
    enrich::{self, EnrichedGameRecord},
    game::GameRecord,
    opening::{self, OpeningAggregate},
    outcome::{Color, ResultCounts},
    player::{self, PlayerAggregate},
    team::{self, TeamColorTotals, TeamRoundAggregate},
};

#[derive(Debug, Clone)]
pub struct TournamentReport {
    games: Arc<[GameRecord]>,
    team_points: Vec<TeamRoundAggregate>,
    enriched: Vec<EnrichedGameRecord>,
    players: Vec<PlayerAggregate>,
}

impl TournamentReport {
    #[must_use]
    pub fn new(games: Arc<[GameRecord]>) -> Self {
        let team_points = team::team_points_by_round(&games);
        let enriched = enrich::enrich_games(&games, &team_points);
        let players = player::player_aggregates(&enriched);
        Self {
            games,
            team_points,
            enriched,
            players,
        }
    }

    #[must_use]
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    #[must_use]
    pub fn team_points(&self) -> &[TeamRoundAggregate] {
        &self.team_points
    }

    #[must_use]
    pub fn enriched(&self) -> &[EnrichedGameRecord] {
        &self.enriched
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerAggregate] {
        &self.players
    }

    /// Every team name appearing on either side, sorted.
    #[must_use]
    pub fn teams(&self) -> BTreeSet<&str> {
        self.games
            .iter()
            .flat_map(|game| Color::ALL.map(|color| game.team(color)))
            .collect()
    }

    /// Every player name appearing on either side, sorted.
    #[must_use]
    pub fn player_names(&self) -> BTreeSet<&str> {
        self.games
            .iter()
            .flat_map(|game| Color::ALL.map(|color| game.player(color)))
            .collect()
    }

    #[must_use]
    pub fn team_color_totals(&self) -> Vec<TeamColorTotals> {
        team::team_color_totals(&self.team_points)
    }

    #[must_use]
    pub fn players_for_team(&self, team: &str) -> Vec<PlayerAggregate> {
        player::players_for_team(&self.enriched, &self.players, team)
    }

    #[must_use]
    pub fn most_valuable_players(&self, limit: usize) -> Vec<PlayerAggregate> {
        player::most_valuable_players(&self.players, limit)
    }

    #[must_use]
    pub fn games_for_player(&self, player: &str) -> Vec<&EnrichedGameRecord> {
        enrich::games_for_player(&self.enriched, player)
    }

    #[must_use]
    pub fn openings(&self, min_games: usize) -> Vec<OpeningAggregate> {
        opening::opening_aggregates(&self.games, min_games)
    }

    #[must_use]
    pub fn games_for_opening(&self, opening: &str) -> Vec<&GameRecord> {
        opening::games_for_opening(&self.games, opening)
    }

    #[must_use]
    pub fn overall_results(&self) -> ResultCounts {
        breakdown::overall_results(&self.games)
    }

    #[must_use]
    pub fn results_by_round(&self) -> Vec<RoundResults> {
        breakdown::results_by_round(&self.games)
    }

    #[must_use]
    pub fn results_by_board(&self) -> Vec<BoardResults> {
        breakdown::results_by_board(&self.games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_util::two_game_match;

    #[test]
    fn test_two_game_match_report() {
        let report = TournamentReport::new(two_game_match().into());

        assert_eq!(report.games().len(), 2);
        assert_eq!(report.teams().into_iter().collect::<Vec<_>>(), ["X", "Y"]);
        assert_eq!(
            report.player_names().into_iter().collect::<Vec<_>>(),
            ["Alice", "Bob", "Carol", "Dan"]
        );
        assert_eq!(report.team_points().len(), 2);
        assert_eq!(report.enriched().len(), 2);
        assert_eq!(report.players().len(), 4);

        let team_x = report.players_for_team("X");
        let names = team_x
            .iter()
            .map(|p| p.player_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Alice", "Dan"]);

        let openings = report.openings(1);
        assert_eq!(openings.len(), 1);
        assert_eq!(openings[0].total_games, 2);
        assert!(report.openings(2).is_empty());

        assert_eq!(report.overall_results().total(), 2);
        assert_eq!(report.results_by_round().len(), 1);
        assert_eq!(report.games_for_player("Bob").len(), 1);
        assert_eq!(report.games_for_opening("Sicilian").len(), 2);
        assert_eq!(report.most_valuable_players(1)[0].player_name, "Alice");
    }

    #[test]
    fn test_queries_do_not_change_report() {
        let report = TournamentReport::new(two_game_match().into());
        let before = report.players().to_vec();
        let mut team_x = report.players_for_team("X");
        team_x.clear();
        let _ = report.most_valuable_players(1);
        assert_eq!(report.players(), before);
    }
}
