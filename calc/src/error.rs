use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Unknown type pairing: {attack} attacking {defend}")]
    UnknownType { attack: String, defend: String },

    #[error("Invalid stat: {monster} has {stat} of 0")]
    InvalidStat { monster: String, stat: &'static str },

    #[error("Defender index {index} out of range for {len} monsters")]
    DefenderOutOfRange { index: usize, len: usize },
}
