use thiserror::Error;

pub mod monster;
pub mod moves;
pub mod table;
pub mod type_chart;

pub use monster::{Monster, parse_monsters};
pub use moves::{Move, MoveClass, MoveValue, parse_moves};
pub use table::{Row, Table, parse_csv_line, parse_table};
pub use type_chart::{TypeChart, parse_type_chart};

/// Tag used in the monster sheet for a monster without a second type
pub const NO_SECOND_TYPE: &str = "NA";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid row format: {0}")]
    InvalidFormat(String),

    #[error("Missing required column: {0}")]
    MissingField(String),
}
