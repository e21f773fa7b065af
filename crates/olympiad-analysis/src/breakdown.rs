//! Result counts across the tournament, per round and per board

use serde::Serialize;

use crate::{game::GameRecord, join, outcome::ResultCounts};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResults {
    pub round: u32,
    pub counts: ResultCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardResults {
    pub board: u32,
    pub counts: ResultCounts,
}

#[must_use]
pub fn overall_results(games: &[GameRecord]) -> ResultCounts {
    ResultCounts::from_results(games.iter().map(GameRecord::result))
}

/// Outcome counts per round, ascending by round.
#[must_use]
pub fn results_by_round(games: &[GameRecord]) -> Vec<RoundResults> {
    join::group_by(games, GameRecord::round)
        .into_iter()
        .map(|(round, games)| RoundResults {
            round,
            counts: ResultCounts::from_results(games.into_iter().map(GameRecord::result)),
        })
        .collect()
}

/// Outcome counts per board number, ascending by board.
#[must_use]
pub fn results_by_board(games: &[GameRecord]) -> Vec<BoardResults> {
    join::group_by(games, GameRecord::board)
        .into_iter()
        .map(|(board, games)| BoardResults {
            board,
            counts: ResultCounts::from_results(games.into_iter().map(GameRecord::result)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_util::{games, raw_row};

    fn sample() -> Vec<GameRecord> {
        games(vec![
            raw_row("1.1", ("A1", "A"), ("B1", "B"), "1-0"),
            raw_row("1.2", ("B2", "B"), ("A2", "A"), "1/2-1/2"),
            raw_row("2.1", ("B1", "B"), ("A1", "A"), "1-0"),
            raw_row("2.2", ("A2", "A"), ("B2", "B"), "0-1"),
            raw_row("3.1", ("A1", "A"), ("B1", "B"), "1/2-1/2"),
        ])
    }

    #[test]
    fn test_overall_results() {
        let counts = overall_results(&sample());
        assert_eq!(
            counts,
            ResultCounts {
                white_wins: 2,
                draws: 2,
                black_wins: 1,
            }
        );
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_results_by_round() {
        let rounds = results_by_round(&sample());
        let summary = rounds
            .iter()
            .map(|r| (r.round, r.counts.total(), r.counts.white_wins))
            .collect::<Vec<_>>();
        assert_eq!(summary, [(1, 2, 1), (2, 2, 1), (3, 1, 0)]);
    }

    #[test]
    fn test_results_by_board() {
        let boards = results_by_board(&sample());
        assert_eq!(
            boards,
            [
                BoardResults {
                    board: 1,
                    counts: ResultCounts {
                        white_wins: 2,
                        draws: 1,
                        black_wins: 0,
                    },
                },
                BoardResults {
                    board: 2,
                    counts: ResultCounts {
                        white_wins: 0,
                        draws: 1,
                        black_wins: 1,
                    },
                },
            ]
        );
    }
}
