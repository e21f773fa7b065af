use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use olympiad_analysis::{load, report::TournamentReport};
use serde::Serialize;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }

    pub fn write_table<F>(&mut self, write: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        write(self).with_context(|| format!("Failed to write table to {}", self.display_path()))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// How a command renders its rows
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Aligned text columns
    #[default]
    Table,
    /// Pretty-printed JSON envelope
    Json,
}

/// Arguments shared by every analysis command
#[derive(Debug, Clone, clap::Args)]
pub struct ReportArg {
    /// Path to the results table CSV file
    pub games: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl ReportArg {
    pub fn load_report(&self) -> anyhow::Result<TournamentReport> {
        let games = load::load_games(&self.games).with_context(|| {
            format!("Failed to load results table: {}", self.games.display())
        })?;
        Ok(TournamentReport::new(Arc::from(games)))
    }

    /// Writes `rows` as a table or as a JSON envelope, depending on `--format`.
    pub fn emit<T, F>(&self, rows: &T, write_table: F) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&mut Output, &T) -> io::Result<()>,
    {
        let mut output = Output::from_output_path(self.output.clone())?;
        match self.format {
            Format::Table => output.write_table(|out| write_table(out, rows))?,
            Format::Json => output.write_json(Envelope::new(&self.games, rows))?,
        }
        if let Output::File { path, .. } = &output {
            tracing::info!(path = %path.display(), "report written");
        }
        Ok(())
    }
}

/// JSON wrapper recording where the rows came from and when
#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: ?Sized> {
    pub source: &'a Path,
    pub generated_at: DateTime<Utc>,
    pub rows: &'a T,
}

impl<'a, T: ?Sized> Envelope<'a, T> {
    pub fn new(source: &'a Path, rows: &'a T) -> Self {
        Self {
            source,
            generated_at: Utc::now(),
            rows,
        }
    }
}
