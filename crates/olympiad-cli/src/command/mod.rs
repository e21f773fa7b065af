use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{
    breakdown::BreakdownArg, games::GamesArg, openings::OpeningsArg, players::PlayersArg,
    summary::SummaryArg, team_players::TeamPlayersArg, teams::TeamsArg,
};

mod breakdown;
mod games;
mod openings;
mod players;
mod summary;
mod team_players;
mod teams;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log more details to stderr (-v: info, -vv: debug); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// What analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Overall result counts
    Summary(#[clap(flatten)] SummaryArg),
    /// Team points per round, or per-team totals by color
    Teams(#[clap(flatten)] TeamsArg),
    /// Player totals over the tournament
    Players(#[clap(flatten)] PlayersArg),
    /// Players of one team, best value score first
    TeamPlayers(#[clap(flatten)] TeamPlayersArg),
    /// Outcome ratios and rating differentials per opening
    Openings(#[clap(flatten)] OpeningsArg),
    /// Result counts per round
    Rounds(#[clap(flatten)] BreakdownArg),
    /// Result counts per board
    Boards(#[clap(flatten)] BreakdownArg),
    /// Games of one player or one opening
    Games(#[clap(flatten)] GamesArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Teams(arg) => teams::run(&arg)?,
        Mode::Players(arg) => players::run(&arg)?,
        Mode::TeamPlayers(arg) => team_players::run(&arg)?,
        Mode::Openings(arg) => openings::run(&arg)?,
        Mode::Rounds(arg) => breakdown::run_rounds(&arg)?,
        Mode::Boards(arg) => breakdown::run_boards(&arg)?,
        Mode::Games(arg) => games::run(&arg)?,
    }
    Ok(())
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
