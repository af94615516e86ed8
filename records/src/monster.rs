//! Monster stat records

use anyhow::{Context, Result};

use crate::NO_SECOND_TYPE;
use crate::table::{Row, Table, leading_int, parse_table};

/// One row of the monster sheet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    /// Unique key; moves refer to their owner by this name
    pub name: String,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
    pub type1: String,
    /// `None` when the monster has no second type
    pub type2: Option<String>,
}

impl Monster {
    /// Create a single-typed monster with all stats zeroed
    pub fn new(name: impl Into<String>, type1: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hp: 0,
            attack: 0,
            defense: 0,
            special_attack: 0,
            special_defense: 0,
            speed: 0,
            type1: type1.into(),
            type2: None,
        }
    }

    /// Sum of the six core stats, widened so it cannot overflow
    pub fn base_stat_total(&self) -> u64 {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
        .into_iter()
        .map(u64::from)
        .sum()
    }

    /// Defending types in slot order
    pub fn types(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.type1.as_str()).chain(self.type2.as_deref())
    }
}

/// Map a raw Type2 cell to an optional tag
pub fn second_type(cell: &str) -> Option<String> {
    let cell = cell.trim();
    if cell.is_empty() || cell == NO_SECOND_TYPE {
        None
    } else {
        Some(cell.to_string())
    }
}

struct MonsterColumns {
    name: usize,
    hp: usize,
    attack: usize,
    defense: usize,
    special_attack: usize,
    special_defense: usize,
    speed: Option<usize>,
    type1: usize,
    type2: Option<usize>,
}

impl MonsterColumns {
    fn locate(table: &Table) -> Result<Self> {
        Ok(Self {
            name: table.require_column("Name")?,
            hp: table.require_column("HP")?,
            attack: table.require_column("Attack")?,
            defense: table.require_column("Defense")?,
            special_attack: table.require_column("SpecialAttack")?,
            special_defense: table.require_column("SpecialDefense")?,
            speed: table.column("Speed"),
            type1: table.require_column("Type1")?,
            type2: table.column("Type2"),
        })
    }

    fn read(&self, row: &Row) -> Monster {
        Monster {
            name: row.get(self.name).to_string(),
            hp: leading_int(row.get(self.hp)),
            attack: leading_int(row.get(self.attack)),
            defense: leading_int(row.get(self.defense)),
            special_attack: leading_int(row.get(self.special_attack)),
            special_defense: leading_int(row.get(self.special_defense)),
            speed: leading_int(row.get_opt(self.speed)),
            type1: row.get(self.type1).to_string(),
            type2: second_type(row.get_opt(self.type2)),
        }
    }
}

/// Parse the monster sheet
///
/// A `BST` column, if present, is ignored; use [`Monster::base_stat_total`].
pub fn parse_monsters(text: &str) -> Result<Vec<Monster>> {
    let table = parse_table(text);
    if table.headers.is_empty() {
        return Ok(Vec::new());
    }

    let columns = MonsterColumns::locate(&table).context("Failed to read monster sheet header")?;
    Ok(table.rows.iter().map(|row| columns.read(row)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SHEET: &str = "\
Name,HP,Attack,Defense,SpecialAttack,SpecialDefense,Speed,Type1,Type2,BST
Emberling,45,60,40,70,50,65,Fire,NA,0
Mossback,80,55,90,40,85,20,Nature,Earth,999
";

    #[test]
    fn test_parse_monsters() {
        let mons = parse_monsters(SHEET).unwrap();
        assert_eq!(mons.len(), 2);
        assert_eq!(
            mons[0],
            Monster {
                name: "Emberling".to_string(),
                hp: 45,
                attack: 60,
                defense: 40,
                special_attack: 70,
                special_defense: 50,
                speed: 65,
                type1: "Fire".to_string(),
                type2: None,
            }
        );
        assert_eq!(mons[1].type2.as_deref(), Some("Earth"));
    }

    #[test]
    fn test_bst_is_derived() {
        let mons = parse_monsters(SHEET).unwrap();
        assert_eq!(mons[0].base_stat_total(), 330);
        assert_eq!(mons[1].base_stat_total(), 370);
    }

    #[test]
    fn test_missing_required_column() {
        let err = parse_monsters("Name,HP,Attack\nBlaze,1,2").unwrap_err();
        assert!(format!("{:#}", err).contains("Missing required column: Defense"));
    }

    #[test]
    fn test_huge_stats_do_not_overflow() {
        let mons = parse_monsters(
            "Name,HP,Attack,Defense,SpecialAttack,SpecialDefense,Type1\n\
             Big,4000000000,4000000000,1,1,1,Fire\n\
             Bigger,5000000000,1,1,1,1,Fire",
        )
        .unwrap();
        assert_eq!(mons[0].base_stat_total(), 8_000_000_003);
        assert_eq!(mons[1].hp, u32::MAX);
        assert_eq!(mons[1].base_stat_total(), u64::from(u32::MAX) + 4);
    }

    #[test]
    fn test_optional_columns_absent() {
        let mons = parse_monsters(
            "Name,HP,Attack,Defense,SpecialAttack,SpecialDefense,Type1\nBlaze,1,2,3,4,5,Fire",
        )
        .unwrap();
        assert_eq!(mons[0].speed, 0);
        assert_eq!(mons[0].type2, None);
    }

    #[test]
    fn test_non_numeric_stat_reads_zero() {
        let mons = parse_monsters(
            "Name,HP,Attack,Defense,SpecialAttack,SpecialDefense,Type1\nBlaze,?,2,3,4,5,Fire",
        )
        .unwrap();
        assert_eq!(mons[0].hp, 0);
    }

    #[test]
    fn test_second_type() {
        assert_eq!(second_type("NA"), None);
        assert_eq!(second_type(""), None);
        assert_eq!(second_type(" Air "), Some("Air".to_string()));
    }

    #[test]
    fn test_types_iter() {
        let mut mon = Monster::new("Gust", "Air");
        assert_eq!(mon.types().collect::<Vec<_>>(), vec!["Air"]);
        mon.type2 = Some("Mind".to_string());
        assert_eq!(mon.types().collect::<Vec<_>>(), vec!["Air", "Mind"]);
    }
}
