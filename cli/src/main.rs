//! `drool` command line front end.
mod loader;
mod render;

use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use drool_calc::{
    AnalysisConfig, AnalysisSortKey, MatrixSortKey, MatrixView, Orientation, SortDirection,
    SortKey, SortState, analyze_defender, build_ko_matrix, build_matrix, sort_incoming,
};

use drool_calc::config::DEFAULT_HIGH_DAMAGE_THRESHOLD;
use loader::{DataPaths, Dataset};

/// Damage matchups over a drool database export
#[derive(Parser)]
#[command(name = "drool")]
#[command(about = "Static damage and matchup tables for drool monsters", long_about = None)]
#[command(version)]
struct Cli {
    /// Monster sheet
    #[arg(long, value_name = "FILE", default_value = "mons.csv")]
    mons: PathBuf,

    /// Move sheet
    #[arg(long, value_name = "FILE", default_value = "moves.csv")]
    moves: PathBuf,

    /// Type chart
    #[arg(long, value_name = "FILE", default_value = "types.csv")]
    types: PathBuf,

    /// %HP above which a value is flagged
    #[arg(long, value_name = "PERCENT", default_value_t = DEFAULT_HIGH_DAMAGE_THRESHOLD)]
    high_damage: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Best move for every attacker/defender pair
    Matrix(MatrixArgs),

    /// Every damaging move against one defender
    Analyze(AnalyzeArgs),

    /// Attack and special attack each attacker needs to KO each defender
    Ko,
}

#[derive(Args)]
struct Direction {
    /// Sort low to high
    #[arg(long, conflicts_with = "descending")]
    ascending: bool,

    /// Sort high to low
    #[arg(long)]
    descending: bool,
}

impl Direction {
    fn is_set(&self) -> bool {
        self.ascending || self.descending
    }

    fn resolve<K: SortKey>(&self, key: K) -> SortState<K> {
        let direction = if self.ascending {
            SortDirection::Ascending
        } else if self.descending {
            SortDirection::Descending
        } else {
            key.default_direction()
        };
        SortState {
            key: Some(key),
            direction,
        }
    }
}

#[derive(Args)]
struct MatrixArgs {
    /// Put defenders down the rows
    #[arg(long)]
    transpose: bool,

    /// Sort rows by the %HP in this column (0-based)
    #[arg(long, value_name = "N", conflicts_with = "sort_name")]
    sort_column: Option<usize>,

    /// Sort rows by name
    #[arg(long)]
    sort_name: bool,

    #[command(flatten)]
    direction: Direction,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Defender name
    #[arg(value_name = "NAME")]
    defender: String,

    /// move, type, attacker, damage or percent
    #[arg(long, value_name = "KEY", default_value = "percent", value_parser = parse_sort_key)]
    sort: AnalysisSortKey,

    #[command(flatten)]
    direction: Direction,
}

fn parse_sort_key(s: &str) -> Result<AnalysisSortKey, String> {
    AnalysisSortKey::parse(s).ok_or_else(|| {
        let known: Vec<_> = AnalysisSortKey::ALL.iter().map(|k| k.as_str()).collect();
        format!("unknown sort key '{s}', expected one of: {}", known.join(", "))
    })
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let config = AnalysisConfig::new().with_high_damage_threshold(cli.high_damage);
    let paths = DataPaths {
        mons: cli.mons,
        moves: cli.moves,
        types: cli.types,
    };

    let data = loader::load(&paths).await?;

    match cli.command {
        Command::Matrix(args) => run_matrix(&data, &args, &config),
        Command::Analyze(args) => run_analyze(&data, &args, &config),
        Command::Ko => run_ko(&data),
    }
}

fn run_matrix(data: &Dataset, args: &MatrixArgs, config: &AnalysisConfig) -> Result<()> {
    let matrix = build_matrix(&data.chart, &data.monsters, &data.moves);
    if !matrix.issues.is_empty() {
        tracing::warn!(skipped = matrix.issues.len(), "Some moves could not be evaluated");
    }

    let orientation = if args.transpose {
        Orientation::DefenderMajor
    } else {
        Orientation::AttackerMajor
    };
    let mut view = MatrixView::new(&matrix, orientation);

    if let Some(sort) = matrix_sort(args, view.column_count())? {
        view.set_sort(sort);
    }

    print!("{}", render::render_matrix(&view, config));
    Ok(())
}

/// Sort requested on the command line, checked against the matrix size
fn matrix_sort(args: &MatrixArgs, columns: usize) -> Result<Option<SortState<MatrixSortKey>>> {
    let key = match (args.sort_column, args.sort_name) {
        (Some(column), _) if column >= columns => {
            bail!("Column {column} is out of range, the matrix has {columns} columns")
        }
        (Some(column), _) => MatrixSortKey::Column(column),
        (None, true) => MatrixSortKey::RowName,
        (None, false) if args.direction.is_set() => {
            bail!("--ascending and --descending need --sort-column or --sort-name")
        }
        (None, false) => return Ok(None),
    };
    Ok(Some(args.direction.resolve(key)))
}

fn run_ko(data: &Dataset) -> Result<()> {
    let matrix = build_ko_matrix(&data.monsters);
    if !matrix.issues.is_empty() {
        tracing::warn!(skipped = matrix.issues.len(), "Some thresholds could not be computed");
    }

    print!("{}", render::render_ko(&matrix));
    Ok(())
}

fn run_analyze(data: &Dataset, args: &AnalyzeArgs, config: &AnalysisConfig) -> Result<()> {
    let index = data
        .monster_index(&args.defender)
        .ok_or_else(|| anyhow!("Unknown monster: {}", args.defender))?;

    let mut analysis = analyze_defender(&data.chart, &data.monsters, &data.moves, index)?;
    if !analysis.issues.is_empty() {
        tracing::warn!(skipped = analysis.issues.len(), "Some moves could not be evaluated");
    }

    let sort = args.direction.resolve(args.sort);
    sort_incoming(&mut analysis.moves, &sort);

    print!(
        "{}",
        render::render_analysis(&analysis.defender, &analysis.moves, &sort, config)
    );
    Ok(())
}
