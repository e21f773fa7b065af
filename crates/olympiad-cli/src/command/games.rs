use clap::ArgGroup;

use crate::{table, util::ReportArg};

#[derive(Debug, Clone, clap::Args)]
#[command(group(ArgGroup::new("filter").required(true).args(["player", "opening"])))]
pub(crate) struct GamesArg {
    #[clap(flatten)]
    report: ReportArg,
    /// Show the games of this player, with value scores
    #[arg(long)]
    player: Option<String>,
    /// Show the games played with this opening
    #[arg(long)]
    opening: Option<String>,
}

pub(crate) fn run(arg: &GamesArg) -> anyhow::Result<()> {
    let report = arg.report.load_report()?;
    if let Some(player) = &arg.player {
        let games = report.games_for_player(player);
        tracing::debug!(player = %player, games = games.len(), "selected player games");
        arg.report.emit(&games[..], |out, rows| {
            table::write_player_games(out, player, rows)
        })
    } else if let Some(opening) = &arg.opening {
        let games = report.games_for_opening(opening);
        tracing::debug!(opening = %opening, games = games.len(), "selected opening games");
        arg.report
            .emit(&games[..], |out, rows| table::write_games(out, rows))
    } else {
        anyhow::bail!("either --player or --opening is required")
    }
}
