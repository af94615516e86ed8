//! Row/column presentation of a matchup matrix

use crate::query::{MatchupCell, MatchupMatrix};

use super::sort::{KeyKind, SortKey, SortState, compare_numeric, compare_text};

/// Which monster axis runs down the rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Rows attack, columns defend
    #[default]
    AttackerMajor,
    /// Rows defend, columns attack
    DefenderMajor,
}

impl Orientation {
    pub fn flip(self) -> Self {
        match self {
            Orientation::AttackerMajor => Orientation::DefenderMajor,
            Orientation::DefenderMajor => Orientation::AttackerMajor,
        }
    }

    /// Label for the top-left corner of the grid
    pub fn corner_label(self) -> &'static str {
        match self {
            Orientation::AttackerMajor => "Atk ↓ / Def →",
            Orientation::DefenderMajor => "Def ↓ / Atk →",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixSortKey {
    /// %HP in the given column
    Column(usize),
    /// Row header name
    RowName,
}

impl SortKey for MatrixSortKey {
    fn kind(&self) -> KeyKind {
        match self {
            MatrixSortKey::Column(_) => KeyKind::Numeric,
            MatrixSortKey::RowName => KeyKind::Text,
        }
    }
}

/// A borrowed, reorderable view over a [`MatchupMatrix`]
///
/// Transposing or sorting only changes how rows and columns map onto the
/// underlying cells; damage is never recomputed.
#[derive(Debug, Clone)]
pub struct MatrixView<'m> {
    matrix: &'m MatchupMatrix,
    orientation: Orientation,
    sort: SortState<MatrixSortKey>,
    row_order: Vec<usize>,
}

impl<'m> MatrixView<'m> {
    pub fn new(matrix: &'m MatchupMatrix, orientation: Orientation) -> Self {
        Self {
            matrix,
            orientation,
            sort: SortState::new(),
            row_order: (0..matrix.len()).collect(),
        }
    }

    pub fn matrix(&self) -> &'m MatchupMatrix {
        self.matrix
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn sort_state(&self) -> SortState<MatrixSortKey> {
        self.sort
    }

    /// Swap the axes, keeping the active sort key and direction
    pub fn transpose(&mut self) {
        self.orientation = self.orientation.flip();
        self.apply_sort();
    }

    /// Select a sort key: same key flips direction, a new key starts at its default
    pub fn sort_by(&mut self, key: MatrixSortKey) {
        self.sort = self.sort.select(key);
        self.apply_sort();
    }

    /// Replace the sort state outright
    pub fn set_sort(&mut self, sort: SortState<MatrixSortKey>) {
        self.sort = sort;
        self.apply_sort();
    }

    pub fn row_count(&self) -> usize {
        self.row_order.len()
    }

    pub fn column_count(&self) -> usize {
        self.matrix.len()
    }

    /// Matrix axis index shown at a display row
    pub fn row_index(&self, row: usize) -> Option<usize> {
        self.row_order.get(row).copied()
    }

    pub fn row_name(&self, row: usize) -> Option<&'m str> {
        let index = self.row_index(row)?;
        self.axis_name(index)
    }

    pub fn column_name(&self, column: usize) -> Option<&'m str> {
        self.axis_name(column)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'m str> + '_ {
        (0..self.column_count()).filter_map(move |c| self.axis_name(c))
    }

    /// Cell at a display row and column
    pub fn cell(&self, row: usize, column: usize) -> Option<&'m MatchupCell> {
        let index = self.row_index(row)?;
        self.axis_cell(index, column)
    }

    /// Cells of one display row, left to right
    pub fn row_cells(&self, row: usize) -> Vec<&'m MatchupCell> {
        (0..self.column_count())
            .filter_map(|c| self.cell(row, c))
            .collect()
    }

    /// Every cell currently displayed
    pub fn cells(&self) -> impl Iterator<Item = &'m MatchupCell> + '_ {
        (0..self.row_count()).flat_map(move |r| self.row_cells(r))
    }

    fn axis_name(&self, index: usize) -> Option<&'m str> {
        self.matrix.rows.get(index).map(|r| r.attacker.as_str())
    }

    fn axis_cell(&self, row_index: usize, column: usize) -> Option<&'m MatchupCell> {
        match self.orientation {
            Orientation::AttackerMajor => self.matrix.cell(row_index, column),
            Orientation::DefenderMajor => self.matrix.cell(column, row_index),
        }
    }

    fn apply_sort(&mut self) {
        let mut order: Vec<usize> = (0..self.matrix.len()).collect();

        if let Some(key) = self.sort.key {
            let direction = self.sort.direction;
            order.sort_by(|&a, &b| {
                let ordering = match key {
                    MatrixSortKey::Column(c) => compare_numeric(
                        self.axis_cell(a, c).map(MatchupCell::percent_hp),
                        self.axis_cell(b, c).map(MatchupCell::percent_hp),
                    ),
                    MatrixSortKey::RowName => compare_text(
                        self.axis_name(a).unwrap_or(""),
                        self.axis_name(b).unwrap_or(""),
                    ),
                };
                direction.apply(ordering)
            });
        }

        self.row_order = order;
    }
}
