//! Loading the results table from CSV
//!
//! The table must provide the columns listed in [`RawGameRow::COLUMNS`]; any
//! other column is ignored. Column names are matched after trimming and
//! lowercasing, so `WhiteElo` and `whiteelo` are the same column.
//!
//! Loading is all-or-nothing: a missing file, a malformed CSV, missing columns
//! or a row violating a game invariant fail the whole load.

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use csv::StringRecord;

use crate::game::{self, DataInvariantError, GameRecord, RawGameRow};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[display("malformed results table: {source}")]
    Csv { source: csv::Error },
    #[display("results table is missing columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },
    #[display("invalid game data: {source}")]
    Invariant { source: DataInvariantError },
}

impl From<csv::Error> for LoadError {
    fn from(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}

impl From<DataInvariantError> for LoadError {
    fn from(source: DataInvariantError) -> Self {
        Self::Invariant { source }
    }
}

/// Loads and normalizes the games of a CSV results table.
pub fn load_games<P>(path: P) -> Result<Vec<GameRecord>, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    let games = read_games(BufReader::new(file))?;
    tracing::info!(path = %path.display(), games = games.len(), "loaded results table");
    Ok(games)
}

/// Reads and normalizes the games of a CSV results table.
pub fn read_games<R>(reader: R) -> Result<Vec<GameRecord>, LoadError>
where
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new().flexible(false).from_reader(reader);
    let headers = canonical_headers(reader.headers()?);
    check_columns(&headers)?;

    let rows = reader
        .records()
        .map(|record| Ok(record?.deserialize::<RawGameRow>(Some(&headers))?))
        .collect::<Result<Vec<_>, csv::Error>>()?;
    tracing::debug!(rows = rows.len(), "read results table rows");

    Ok(game::normalize_rows(rows)?)
}

fn canonical_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect()
}

fn check_columns(headers: &StringRecord) -> Result<(), LoadError> {
    let columns = RawGameRow::COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| (*column).to_owned())
        .collect::<Vec<_>>();
    if columns.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingColumns { columns })
    }
}
