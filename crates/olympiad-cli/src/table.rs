//! Plain-text tables
//!
//! Each table is written as a header, a separator line and one line per row,
//! with fixed column widths. Missing values are shown as `N/A`.

use std::io::{self, Write};

use olympiad_analysis::{
    enrich::EnrichedGameRecord,
    game::GameRecord,
    opening::OpeningAggregate,
    outcome::{Color, GameResult, ResultCounts},
    player::PlayerAggregate,
    team::{TeamColorTotals, TeamRoundAggregate},
};

fn write_separator<W>(out: &mut W, width: usize) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "  {}", "-".repeat(width))
}

fn optional(value: Option<f64>, precision: usize) -> String {
    value.map_or("N/A".to_string(), |v| format!("{v:.precision$}"))
}

fn percent(counts: &ResultCounts, result: GameResult) -> String {
    optional(counts.ratio(result).map(|r| r * 100.0), 1)
}

/// Outcome counts and shares, one row per label (round, board, ...).
pub fn write_result_counts<W>(
    out: &mut W,
    label_col: &str,
    rows: &[(String, ResultCounts)],
) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "  {:<10} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        label_col, "Games", "1-0", "Draw", "0-1", "1-0%", "Draw%", "0-1%",
    )?;
    // label(10) + 7 columns(8) + spaces(7)
    write_separator(out, 73)?;
    for (label, counts) in rows {
        writeln!(
            out,
            "  {:<10} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
            label,
            counts.total(),
            counts.white_wins,
            counts.draws,
            counts.black_wins,
            percent(counts, GameResult::WhiteWin),
            percent(counts, GameResult::Draw),
            percent(counts, GameResult::BlackWin),
        )?;
    }
    Ok(())
}

pub fn write_team_points<W>(out: &mut W, rows: &[TeamRoundAggregate]) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "  {:>5} {:<24} {:>8} {:>8} {:>8}",
        "Round", "Team", "White", "Black", "Total",
    )?;
    write_separator(out, 57)?;
    for row in rows {
        writeln!(
            out,
            "  {:>5} {:<24} {:>8.1} {:>8.1} {:>8.1}",
            row.round, row.team, row.white_points, row.black_points, row.total_points,
        )?;
    }
    Ok(())
}

pub fn write_team_totals<W>(out: &mut W, rows: &[TeamColorTotals]) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "  {:<24} {:>8} {:>8} {:>8}",
        "Team", "White", "Black", "Total",
    )?;
    write_separator(out, 51)?;
    for row in rows {
        writeln!(
            out,
            "  {:<24} {:>8.1} {:>8.1} {:>8.1}",
            row.team,
            row.white_points,
            row.black_points,
            row.white_points + row.black_points,
        )?;
    }
    Ok(())
}

pub fn write_players<W>(out: &mut W, rows: &[PlayerAggregate]) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "  {:<28} {:>6} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7} {:>9} {:>9}",
        "Player",
        "Games",
        "Points",
        "Value",
        "W Gms",
        "W Pts",
        "B Gms",
        "B Pts",
        "W EloDiff",
        "B EloDiff",
    )?;
    // name(28) + games(6) + 6 columns(7) + 2 columns(9) + spaces(9)
    write_separator(out, 103)?;
    for row in rows {
        writeln!(
            out,
            "  {:<28} {:>6} {:>7.1} {:>7.2} {:>7} {:>7.1} {:>7} {:>7.1} {:>9} {:>9}",
            row.player_name,
            row.total_games,
            row.total_points,
            row.total_value_score,
            row.games(Color::White),
            row.points(Color::White),
            row.games(Color::Black),
            row.points(Color::Black),
            optional(row.mean_relative_elo_difference(Color::White), 1),
            optional(row.mean_relative_elo_difference(Color::Black), 1),
        )?;
    }
    Ok(())
}

pub fn write_openings<W>(out: &mut W, rows: &[OpeningAggregate]) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "  {:<40} {:>6} {:>7} {:>7} {:>7} {:>9} {:>9}",
        "Opening", "Games", "1-0%", "Draw%", "0-1%", "EloMean", "EloMedian",
    )?;
    write_separator(out, 93)?;
    for row in rows {
        writeln!(
            out,
            "  {:<40} {:>6} {:>7.1} {:>7.1} {:>7.1} {:>9} {:>9}",
            row.opening,
            row.total_games,
            row.white_win_ratio * 100.0,
            row.draw_ratio * 100.0,
            row.black_win_ratio * 100.0,
            optional(row.elo_difference_mean, 1),
            optional(row.elo_difference_median, 1),
        )?;
    }
    Ok(())
}

pub fn write_games<W>(out: &mut W, games: &[&GameRecord]) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "  {:>7} {:>5} {:<28} {:>5} {:<28} {:>5} {:<8} {:<30}",
        "Round", "Board", "White", "Elo", "Black", "Elo", "Result", "Opening",
    )?;
    write_separator(out, 123)?;
    for game in games {
        writeln!(
            out,
            "  {:>7} {:>5} {:<28} {:>5} {:<28} {:>5} {:<8} {:<30}",
            format!("{}.{}", game.round(), game.team_board()),
            game.board(),
            format!("{} ({})", game.player(Color::White), game.team(Color::White)),
            game.elo(Color::White),
            format!("{} ({})", game.player(Color::Black), game.team(Color::Black)),
            game.elo(Color::Black),
            game.result().to_string(),
            game.opening(),
        )?;
    }
    Ok(())
}

/// Games of one player, seen from that player's side.
pub fn write_player_games<W>(
    out: &mut W,
    player: &str,
    games: &[&EnrichedGameRecord],
) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "  {:>7} {:<6} {:<28} {:>8} {:>6} {:>7} {:>7} {:<30}",
        "Round", "Color", "Opponent", "EloDiff", "Points", "TeamPts", "Value", "Opening",
    )?;
    write_separator(out, 106)?;
    for enriched in games {
        let game = &enriched.game;
        let color = if game.player(Color::White) == player {
            Color::White
        } else {
            Color::Black
        };
        let opponent = color.opponent();
        writeln!(
            out,
            "  {:>7} {:<6} {:<28} {:>8} {:>6.1} {:>7} {:>7.2} {:<30}",
            format!("{}.{}", game.round(), game.team_board()),
            color.to_string(),
            format!("{} ({})", game.player(opponent), game.team(opponent)),
            game.relative_elo_difference(color),
            game.score(color),
            optional(enriched.team_total_points(color), 1),
            enriched.value_score(color),
            game.opening(),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written<F>(write: F) -> Vec<String>
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_result_counts_table() {
        let rows = vec![
            (
                "1".to_owned(),
                ResultCounts {
                    white_wins: 1,
                    draws: 2,
                    black_wins: 1,
                },
            ),
            ("2".to_owned(), ResultCounts::default()),
        ];
        let lines = written(|out| write_result_counts(out, "Round", &rows));
        assert_eq!(lines.len(), 4);
        assert!(lines[0].trim_start().starts_with("Round"));
        assert!(lines[1].trim().chars().all(|c| c == '-'));
        let cells = lines[2].split_whitespace().collect::<Vec<_>>();
        assert_eq!(cells, ["1", "4", "1", "2", "1", "25.0", "50.0", "25.0"]);
        let cells = lines[3].split_whitespace().collect::<Vec<_>>();
        assert_eq!(cells, ["2", "0", "0", "0", "0", "N/A", "N/A", "N/A"]);
    }

    #[test]
    fn test_team_totals_table() {
        let rows = vec![TeamColorTotals {
            team: "Norway".to_owned(),
            white_points: 3.5,
            black_points: 2.0,
        }];
        let lines = written(|out| write_team_totals(out, &rows));
        let cells = lines[2].split_whitespace().collect::<Vec<_>>();
        assert_eq!(cells, ["Norway", "3.5", "2.0", "5.5"]);
    }

    #[test]
    fn test_empty_openings_table() {
        let lines = written(|out| write_openings(out, &[]));
        assert_eq!(lines.len(), 2);
    }
}
