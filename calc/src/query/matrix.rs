//! Best-move matchup matrix

use drool_records::{Monster, Move, MoveClass, TypeChart};

use super::DamageIssue;
use crate::damage::{MoveDamage, compute_damage};
use crate::index::MoveIndex;

/// Best single move from one attacker against one defender
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupCell {
    pub attacker: String,
    pub defender: String,
    /// `None` when the attacker has nothing that deals damage here
    pub best: Option<MoveDamage>,
}

impl MatchupCell {
    /// %HP of the best move, 0 when there is none
    pub fn percent_hp(&self) -> f64 {
        self.best.as_ref().map_or(0.0, |b| b.percent_hp)
    }

    /// `"Move Name (Class)"`, or empty when there is no move
    pub fn source(&self) -> String {
        self.best
            .as_ref()
            .map(|b| format!("{} ({})", b.move_name, b.move_class))
            .unwrap_or_default()
    }

    pub fn move_name(&self) -> Option<&str> {
        self.best.as_ref().map(|b| b.move_name.as_str())
    }

    pub fn move_type(&self) -> Option<&str> {
        self.best.as_ref().map(|b| b.move_type.as_str())
    }

    pub fn move_class(&self) -> Option<&MoveClass> {
        self.best.as_ref().map(|b| &b.move_class)
    }

    /// Type multiplier of the best move, 0 when there is none
    pub fn type_multiplier(&self) -> f64 {
        self.best.as_ref().map_or(0.0, |b| b.type_multiplier)
    }
}

/// All cells for one attacker, in defender order
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupRow {
    pub attacker: String,
    pub cells: Vec<MatchupCell>,
}

/// Attacker-major grid of best-move cells
///
/// Row `i` is `monsters[i]` attacking; cell `j` of that row is against
/// `monsters[j]`. Self-pairs are included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchupMatrix {
    pub rows: Vec<MatchupRow>,
    /// Moves skipped because their damage could not be computed
    pub issues: Vec<DamageIssue>,
}

impl MatchupMatrix {
    /// Number of monsters on each axis
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, attacker: usize, defender: usize) -> Option<&MatchupCell> {
        self.rows.get(attacker)?.cells.get(defender)
    }

    /// Look a cell up by monster names
    pub fn find(&self, attacker: &str, defender: &str) -> Option<&MatchupCell> {
        self.rows
            .iter()
            .find(|r| r.attacker == attacker)?
            .cells
            .iter()
            .find(|c| c.defender == defender)
    }

    /// Monster names in axis order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.attacker.as_str())
    }

    pub fn cells(&self) -> impl Iterator<Item = &MatchupCell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }
}

/// Keep the move with the strictly highest %HP; earlier moves win ties.
/// A move has to beat 0% to count, so an immune-only attacker has no best move.
fn best_move(
    chart: &TypeChart,
    attacker_moves: &[&Move],
    attacker: &Monster,
    defender: &Monster,
    issues: &mut Vec<DamageIssue>,
) -> Option<MoveDamage> {
    let mut best: Option<MoveDamage> = None;

    for mv in attacker_moves {
        match compute_damage(chart, mv, attacker, defender) {
            Ok(Some(damage)) => {
                let current = best.as_ref().map_or(0.0, |b| b.percent_hp);
                if damage.percent_hp > current {
                    best = Some(damage);
                }
            }
            Ok(None) => {}
            Err(error) => DamageIssue::record(issues, attacker, defender, mv, error),
        }
    }

    best
}

/// Build the full attacker × defender matrix of best moves
pub fn build_matrix(chart: &TypeChart, monsters: &[Monster], moves: &[Move]) -> MatchupMatrix {
    let index = MoveIndex::new(moves);
    let mut issues = Vec::new();
    let mut rows = Vec::with_capacity(monsters.len());

    for attacker in monsters {
        let attacker_moves = index.moves_for(&attacker.name);
        let mut cells = Vec::with_capacity(monsters.len());

        for defender in monsters {
            cells.push(MatchupCell {
                attacker: attacker.name.clone(),
                defender: defender.name.clone(),
                best: best_move(chart, attacker_moves, attacker, defender, &mut issues),
            });
        }

        rows.push(MatchupRow {
            attacker: attacker.name.clone(),
            cells,
        });
    }

    tracing::debug!(
        monsters = monsters.len(),
        moves = moves.len(),
        issues = issues.len(),
        "Built matchup matrix"
    );

    MatchupMatrix { rows, issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use drool_records::MoveValue;
    use pretty_assertions::assert_eq;

    fn chart() -> TypeChart {
        let mut chart = TypeChart::new();
        for a in ["Fire", "Water", "Nature"] {
            for d in ["Fire", "Water", "Nature"] {
                chart.insert(a, d, 1.0);
            }
        }
        chart.insert("Fire", "Nature", 2.0);
        chart.insert("Water", "Fire", 2.0);
        chart.insert("Fire", "Water", 5.0);
        chart
    }

    fn mon(name: &str, type1: &str, hp: u32, atk: u32, def: u32) -> Monster {
        Monster {
            hp,
            attack: atk,
            defense: def,
            special_attack: atk,
            special_defense: def,
            ..Monster::new(name, type1)
        }
    }

    fn mv(name: &str, mon: &str, ty: &str, class: MoveClass, power: u32) -> Move {
        Move::new(name, mon, ty, class, MoveValue::Known(power))
    }

    fn roster() -> Vec<Monster> {
        vec![
            mon("Emberling", "Fire", 100, 100, 50),
            mon("Tidepup", "Water", 100, 80, 80),
            mon("Mossback", "Nature", 100, 60, 100),
        ]
    }

    #[test]
    fn test_shape_includes_self_pairs() {
        let monsters = roster();
        let moves = vec![mv("Ember", "Emberling", "Fire", MoveClass::Special, 40)];
        let matrix = build_matrix(&chart(), &monsters, &moves);

        assert_eq!(matrix.len(), 3);
        for (i, row) in matrix.rows.iter().enumerate() {
            assert_eq!(row.attacker, monsters[i].name);
            assert_eq!(row.cells.len(), 3);
            for (j, cell) in row.cells.iter().enumerate() {
                assert_eq!(cell.defender, monsters[j].name);
            }
        }

        // 40 * 100 / 50, neutral
        let own = matrix.cell(0, 0).unwrap();
        assert_eq!(own.attacker, "Emberling");
        assert_eq!(own.defender, "Emberling");
        assert_eq!(own.percent_hp(), 80.0);
    }

    #[test]
    fn test_picks_highest_percent() {
        let monsters = roster();
        let moves = vec![
            mv("Ember", "Emberling", "Fire", MoveClass::Special, 40),
            mv("Tackle", "Emberling", "Water", MoveClass::Physical, 60),
            mv("Glare", "Emberling", "Fire", MoveClass::Other, 200),
        ];
        let matrix = build_matrix(&chart(), &monsters, &moves);

        // vs Mossback: Ember 40*100/100*2 = 80, Tackle 60*100/100*1 = 60
        let cell = matrix.find("Emberling", "Mossback").unwrap();
        assert_eq!(cell.percent_hp(), 80.0);
        assert_eq!(cell.source(), "Ember (Special)");
        assert_eq!(cell.move_type(), Some("Fire"));
        assert_eq!(cell.move_class(), Some(&MoveClass::Special));
        assert_eq!(cell.type_multiplier(), 2.0);

        // vs Tidepup: Ember 40*100/80*0.5 = 25, Tackle 60*100/80 = 75
        let cell = matrix.find("Emberling", "Tidepup").unwrap();
        assert_eq!(cell.percent_hp(), 75.0);
        assert_eq!(cell.move_name(), Some("Tackle"));
    }

    #[test]
    fn test_tie_keeps_first_move() {
        let monsters = roster();
        let moves = vec![
            mv("First", "Tidepup", "Nature", MoveClass::Physical, 50),
            mv("Second", "Tidepup", "Nature", MoveClass::Special, 50),
        ];
        let matrix = build_matrix(&chart(), &monsters, &moves);
        assert_eq!(
            matrix.find("Tidepup", "Emberling").unwrap().move_name(),
            Some("First")
        );
    }

    #[test]
    fn test_attacker_without_moves() {
        let monsters = roster();
        let moves = vec![mv("Ember", "Emberling", "Fire", MoveClass::Special, 40)];
        let matrix = build_matrix(&chart(), &monsters, &moves);

        for cell in &matrix.rows[2].cells {
            assert_eq!(cell.percent_hp(), 0.0);
            assert_eq!(cell.source(), "");
            assert_eq!(cell.move_type(), None);
            assert_eq!(cell.type_multiplier(), 0.0);
        }
    }

    #[test]
    fn test_dangling_moves_are_ignored() {
        let monsters = roster();
        let moves = vec![mv("Lost", "Nobody", "Fire", MoveClass::Physical, 100)];
        let matrix = build_matrix(&chart(), &monsters, &moves);
        assert!(matrix.cells().all(|c| c.best.is_none()));
        assert!(matrix.issues.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let monsters = roster();
        let moves = vec![
            mv("Ember", "Emberling", "Fire", MoveClass::Special, 40),
            mv("Splash", "Tidepup", "Water", MoveClass::Special, 55),
            mv("Vine", "Mossback", "Nature", MoveClass::Physical, 45),
        ];
        let first = build_matrix(&chart(), &monsters, &moves);
        let second = build_matrix(&chart(), &monsters, &moves);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_move_does_not_abort() {
        let monsters = roster();
        let moves = vec![
            mv("Static", "Emberling", "Lightning", MoveClass::Special, 90),
            mv("Ember", "Emberling", "Fire", MoveClass::Special, 40),
        ];
        let matrix = build_matrix(&chart(), &monsters, &moves);

        assert_eq!(matrix.find("Emberling", "Mossback").unwrap().percent_hp(), 80.0);
        assert_eq!(matrix.issues.len(), 3);
        assert!(
            matrix
                .issues
                .iter()
                .all(|i| i.move_name == "Static"
                    && matches!(i.error, CalcError::UnknownType { .. }))
        );
    }

    #[test]
    fn test_zero_hp_defender_is_reported() {
        let mut monsters = roster();
        monsters[1].hp = 0;
        let moves = vec![mv("Ember", "Emberling", "Fire", MoveClass::Special, 40)];
        let matrix = build_matrix(&chart(), &monsters, &moves);

        assert_eq!(matrix.find("Emberling", "Tidepup").unwrap().best, None);
        assert_eq!(matrix.issues.len(), 1);
        assert_eq!(matrix.issues[0].defender, "Tidepup");
    }

    #[test]
    fn test_empty_roster() {
        let matrix = build_matrix(&chart(), &[], &[]);
        assert!(matrix.is_empty());
        assert_eq!(matrix.names().count(), 0);
    }
}
