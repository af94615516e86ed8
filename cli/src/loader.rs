//! Reads the three CSV exports from disk

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use drool_records::{Monster, Move, TypeChart, parse_monsters, parse_moves, parse_type_chart};

/// Where the exports live
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub mons: PathBuf,
    pub moves: PathBuf,
    pub types: PathBuf,
}

/// One consistent snapshot of the database
#[derive(Debug, Clone)]
pub struct Dataset {
    pub chart: TypeChart,
    pub monsters: Vec<Monster>,
    pub moves: Vec<Move>,
}

impl Dataset {
    /// Position of a monster by name; exact match first, then ignoring case
    pub fn monster_index(&self, name: &str) -> Option<usize> {
        self.monsters
            .iter()
            .position(|m| m.name == name)
            .or_else(|| {
                self.monsters
                    .iter()
                    .position(|m| m.name.eq_ignore_ascii_case(name))
            })
    }
}

pub async fn load(paths: &DataPaths) -> Result<Dataset> {
    let (mons, moves, types) = tokio::try_join!(
        read(&paths.mons),
        read(&paths.moves),
        read(&paths.types)
    )?;

    let monsters = parse_monsters(&mons)
        .with_context(|| format!("Failed to parse monsters from {}", paths.mons.display()))?;
    let moves = parse_moves(&moves)
        .with_context(|| format!("Failed to parse moves from {}", paths.moves.display()))?;
    let chart = parse_type_chart(&types)
        .with_context(|| format!("Failed to parse type chart from {}", paths.types.display()))?;

    tracing::info!(
        monsters = monsters.len(),
        moves = moves.len(),
        types = chart.types().len(),
        "Loaded database"
    );

    Ok(Dataset {
        chart,
        monsters,
        moves,
    })
}

async fn read(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}
