//! Plain-text tables for the terminal

use std::fmt::Write;

use drool_calc::{
    AnalysisConfig, AnalysisSortKey, IncomingMove, IntensityScale, KoMatrix, MatrixSortKey,
    MatrixView, Shade, SortState,
};

/// Glyphs from faint to dense; a shade of 0 draws blank
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Marker drawn next to values above the high-damage threshold
const HIGH_MARK: char = '!';

fn shade_glyph(shade: Shade, ceiling: u8) -> char {
    match shade {
        Shade::High => HIGH_MARK,
        Shade::Scaled(_) if ceiling == 0 => SHADES[0],
        Shade::Scaled(level) => {
            let last = SHADES.len() - 1;
            let slot = usize::from(level) * last / usize::from(ceiling);
            SHADES[slot.min(last)]
        }
    }
}

fn percent_cell(value: f64, config: &AnalysisConfig, scale: &IntensityScale) -> String {
    let glyph = shade_glyph(config.shade(scale, value), config.intensity_ceiling);
    format!("{value:>7.1}%{glyph}")
}

/// Grid of best-move %HP followed by the move behind each non-empty cell
pub fn render_matrix(view: &MatrixView<'_>, config: &AnalysisConfig) -> String {
    let mut out = String::new();
    let scale = config.intensity_scale(view.cells().map(|c| c.percent_hp()));
    let corner = view.orientation().corner_label();
    let sort = view.sort_state();

    let label_width = (0..view.row_count())
        .filter_map(|r| view.row_name(r))
        .map(|n| n.chars().count())
        .chain([corner.chars().count()])
        .max()
        .unwrap_or(0);

    let headers: Vec<String> = view
        .column_names()
        .enumerate()
        .map(|(c, name)| match sort.indicator_for(MatrixSortKey::Column(c)) {
            Some(arrow) => format!("{name} {arrow}"),
            None => name.to_string(),
        })
        .collect();
    let column_width = headers
        .iter()
        .map(|h| h.chars().count())
        .max()
        .unwrap_or(0)
        .max(9);

    let _ = write!(out, "{corner:<label_width$}");
    for header in &headers {
        let _ = write!(out, " | {header:>column_width$}");
    }
    out.push('\n');

    for row in 0..view.row_count() {
        let name = view.row_name(row).unwrap_or("");
        let _ = write!(out, "{name:<label_width$}");
        for cell in view.row_cells(row) {
            let text = percent_cell(cell.percent_hp(), config, &scale);
            let _ = write!(out, " | {text:>column_width$}");
        }
        out.push('\n');
    }

    let mut sources = view.cells().filter(|c| c.best.is_some()).peekable();
    if sources.peek().is_some() {
        out.push_str("\nBest moves\n");
        for cell in sources {
            let _ = writeln!(
                out,
                "  {} → {}: {} {:.1}%",
                cell.attacker,
                cell.defender,
                cell.source(),
                cell.percent_hp()
            );
        }
    }

    out
}

/// One line per incoming move with its formula underneath
pub fn render_analysis(
    defender: &str,
    entries: &[IncomingMove],
    sort: &SortState<AnalysisSortKey>,
    config: &AnalysisConfig,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Incoming damage against {defender}");

    if entries.is_empty() {
        out.push_str("  No damaging moves\n");
        return out;
    }

    let scale = config.intensity_scale(entries.iter().map(|e| e.damage.percent_hp));
    let title = |key: AnalysisSortKey, label: &str| match sort.indicator_for(key) {
        Some(arrow) => format!("{label} {arrow}"),
        None => label.to_string(),
    };

    let _ = writeln!(
        out,
        "{:<20} {:<10} {:<16} {:>10} {:>10}",
        title(AnalysisSortKey::MoveName, "Move"),
        title(AnalysisSortKey::MoveType, "Type"),
        title(AnalysisSortKey::Attacker, "Attacker"),
        title(AnalysisSortKey::Damage, "Damage"),
        title(AnalysisSortKey::PercentHp, "% HP"),
    );

    for entry in entries {
        let damage = &entry.damage;
        let _ = writeln!(
            out,
            "{:<20} {:<10} {:<16} {:>10.1} {:>10}",
            damage.move_name,
            damage.move_type,
            entry.attacker,
            damage.damage,
            percent_cell(damage.percent_hp, config, &scale),
        );
        let _ = writeln!(out, "    {} ({})", damage.formula(), damage.move_class);
    }

    out
}

fn threshold_text(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.0}"))
}

/// Defender rows, attacker columns; each cell reads `physical/special`
pub fn render_ko(matrix: &KoMatrix) -> String {
    let mut out = String::new();
    let corner = "Def ↓ / Atk →";

    let label_width = matrix
        .rows
        .iter()
        .map(|r| r.defender.chars().count())
        .chain([corner.chars().count()])
        .max()
        .unwrap_or(0);

    let rendered: Vec<Vec<String>> = matrix
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|c| format!("{}/{}", threshold_text(c.physical), threshold_text(c.special)))
                .collect()
        })
        .collect();
    let attackers: Vec<&str> = matrix
        .rows
        .first()
        .map(|r| r.cells.iter().map(|c| c.attacker.as_str()).collect())
        .unwrap_or_default();
    let column_width = attackers
        .iter()
        .map(|a| a.chars().count())
        .chain(rendered.iter().flatten().map(|t| t.chars().count()))
        .max()
        .unwrap_or(0);

    let _ = write!(out, "{corner:<label_width$}");
    for attacker in &attackers {
        let _ = write!(out, " | {attacker:>column_width$}");
    }
    out.push('\n');

    for (row, texts) in matrix.rows.iter().zip(&rendered) {
        let _ = write!(out, "{:<label_width$}", row.defender);
        for text in texts {
            let _ = write!(out, " | {text:>column_width$}");
        }
        out.push('\n');
    }

    out
}
