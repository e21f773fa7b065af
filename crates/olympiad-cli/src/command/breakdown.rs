//! Result counts per round and per board

use crate::{table, util::ReportArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BreakdownArg {
    #[clap(flatten)]
    report: ReportArg,
}

pub(crate) fn run_rounds(arg: &BreakdownArg) -> anyhow::Result<()> {
    let report = arg.report.load_report()?;
    let rounds = report.results_by_round();
    arg.report.emit(&rounds[..], |out, rows| {
        let rows = rows
            .iter()
            .map(|row| (row.round.to_string(), row.counts))
            .collect::<Vec<_>>();
        table::write_result_counts(out, "Round", &rows)
    })
}

pub(crate) fn run_boards(arg: &BreakdownArg) -> anyhow::Result<()> {
    let report = arg.report.load_report()?;
    let boards = report.results_by_board();
    arg.report.emit(&boards[..], |out, rows| {
        let rows = rows
            .iter()
            .map(|row| (row.board.to_string(), row.counts))
            .collect::<Vec<_>>();
        table::write_result_counts(out, "Board", &rows)
    })
}
