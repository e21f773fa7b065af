use crate::{table, util::ReportArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TeamsArg {
    #[clap(flatten)]
    report: ReportArg,
    /// Show per-team totals over all rounds instead of per-round points
    #[arg(long)]
    totals: bool,
}

pub(crate) fn run(arg: &TeamsArg) -> anyhow::Result<()> {
    let report = arg.report.load_report()?;
    if arg.totals {
        let totals = report.team_color_totals();
        arg.report
            .emit(&totals[..], |out, rows| table::write_team_totals(out, rows))
    } else {
        arg.report.emit(report.team_points(), |out, rows| {
            table::write_team_points(out, rows)
        })
    }
}
