use crate::{table, util::ReportArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct OpeningsArg {
    #[clap(flatten)]
    report: ReportArg,
    /// Only show openings played in more than N games
    #[arg(long, value_name = "N", default_value_t = 0)]
    min_games: usize,
}

pub(crate) fn run(arg: &OpeningsArg) -> anyhow::Result<()> {
    let report = arg.report.load_report()?;
    let openings = report.openings(arg.min_games);
    arg.report
        .emit(&openings[..], |out, rows| table::write_openings(out, rows))
}
