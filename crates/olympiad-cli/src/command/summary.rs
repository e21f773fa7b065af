use std::io::{self, Write};

use olympiad_analysis::outcome::ResultCounts;
use serde::Serialize;

use crate::{table, util::ReportArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    report: ReportArg,
}

#[derive(Debug, Serialize)]
struct Summary {
    games: usize,
    teams: usize,
    players: usize,
    results: ResultCounts,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let report = arg.report.load_report()?;
    let summary = Summary {
        games: report.games().len(),
        teams: report.teams().len(),
        players: report.player_names().len(),
        results: report.overall_results(),
    };
    arg.report.emit(&summary, write_summary)
}

fn write_summary<W>(out: &mut W, summary: &Summary) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Games:   {}", summary.games)?;
    writeln!(out, "Teams:   {}", summary.teams)?;
    writeln!(out, "Players: {}", summary.players)?;
    writeln!(out)?;
    table::write_result_counts(out, "Results", &[("all".to_owned(), summary.results)])
}
