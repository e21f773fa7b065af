use crate::{table, util::ReportArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayersArg {
    #[clap(flatten)]
    report: ReportArg,
    /// Only show the N players with the highest value score
    #[arg(long, value_name = "N")]
    top: Option<usize>,
}

pub(crate) fn run(arg: &PlayersArg) -> anyhow::Result<()> {
    let report = arg.report.load_report()?;
    let players = match arg.top {
        Some(limit) => report.most_valuable_players(limit),
        None => report.players().to_vec(),
    };
    arg.report
        .emit(&players[..], |out, rows| table::write_players(out, rows))
}
