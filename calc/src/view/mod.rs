//! Ranked, transposable presentations of query results
//!
//! Nothing here recomputes damage. Views reorder or relabel what the
//! queries produced and derive display shading from it.

mod intensity;
mod matrix_view;
mod sort;

pub use intensity::{IntensityScale, Shade};
pub use matrix_view::{MatrixSortKey, MatrixView, Orientation};
pub use sort::{
    AnalysisSortKey, KeyKind, SortDirection, SortKey, SortState, compare_numeric, compare_text,
    sort_incoming, sort_results,
};
