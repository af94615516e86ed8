//! Static damage and matchup calculations for the drool monster database.
//!
//! This crate is the computational core behind the editor's analysis tab.
//! It takes read-only snapshots of the monster, move and type tables and
//! returns freshly built results; it keeps no state between calls.
//!
//! # Overview
//!
//! ```text
//! drool-records (typed rows + CSV mapping)
//!        │
//!        ▼
//! drool-calc ← THIS CRATE
//!   effectiveness ─► damage ─► query::{matrix, analysis} ─► view
//!        │
//!        └─> drool-cli (text renderer)
//! ```
//!
//! # Main Types
//!
//! - [`effectiveness()`] - type multiplier lookup with the legacy `5 = 0.5` rule
//! - [`compute_damage`] / [`MoveDamage`] - one move against one defender
//! - [`MoveIndex`] - moves grouped by owning monster
//! - [`build_matrix`] / [`MatchupMatrix`] - best move for every attacker/defender pair
//! - [`analyze_defender`] / [`DefenderAnalysis`] - every move against one defender
//! - [`build_ko_matrix`] / [`KoMatrix`] - stat needed to KO, per stat pair
//! - [`MatrixView`], [`SortState`], [`IntensityScale`] - ranking and shading for display
//!
//! # Example Usage
//!
//! ```ignore
//! use drool_calc::{build_matrix, MatrixView, MatrixSortKey, Orientation};
//!
//! let matrix = build_matrix(&chart, &monsters, &moves);
//! let mut view = MatrixView::new(&matrix, Orientation::AttackerMajor);
//! view.sort_by(MatrixSortKey::Column(0));
//!
//! for row in 0..view.row_count() {
//!     let cell = view.cell(row, 0).unwrap();
//!     println!("{}: {:.1}%", view.row_name(row).unwrap(), cell.percent_hp());
//! }
//! ```

pub mod config;
pub mod damage;
pub mod effectiveness;
pub mod error;
pub mod index;
pub mod query;
pub mod view;

pub use config::AnalysisConfig;
pub use damage::{DamageKind, MoveDamage, compute_damage};
pub use effectiveness::{LEGACY_HALF_SENTINEL, NO_SECOND_TYPE, effectiveness, single_effectiveness};
pub use error::CalcError;
pub use index::{MoveIndex, moves_for};
pub use query::{
    DamageIssue, DefenderAnalysis, IncomingMove, KoCell, KoIssue, KoMatrix, KoRow, MatchupCell,
    MatchupMatrix, MatchupRow, analyze_defender, build_ko_matrix, build_matrix, ko_threshold,
};
pub use view::{
    AnalysisSortKey, IntensityScale, MatrixSortKey, MatrixView, Orientation, Shade, SortDirection,
    SortKey, SortState, sort_incoming, sort_results,
};

// Re-export the record types every caller needs
pub use drool_records::{Monster, Move, MoveClass, MoveValue, TypeChart};
