use crate::{table, util::ReportArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TeamPlayersArg {
    #[clap(flatten)]
    report: ReportArg,
    /// Team name, as written in the results table
    #[arg(long)]
    team: String,
}

pub(crate) fn run(arg: &TeamPlayersArg) -> anyhow::Result<()> {
    let report = arg.report.load_report()?;
    if !report.teams().contains(arg.team.as_str()) {
        tracing::warn!(team = %arg.team, "team does not appear in the results table");
    }
    let players = report.players_for_team(&arg.team);
    arg.report
        .emit(&players[..], |out, rows| table::write_players(out, rows))
}
