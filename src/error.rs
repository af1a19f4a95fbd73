use thiserror::Error;

/// Errors produced while parsing, verifying or solving a cube.
///
/// Apart from the parsing variants, every kind here points at a defect in the cube model
/// rather than at bad input: a state built through [`crate::scramble`] and solved through
/// [`crate::solver`] never produces them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid move `{0}`")]
    InvalidMove(String),
    #[error("invalid facelet string")]
    InvalidFaceletString,
    #[error("invalid facelet value")]
    InvalidFaceletValue,
    #[error("malformed cube state: {0}")]
    MalformedState(&'static str),
    #[error("search exhausted the frontier after exploring {explored} states")]
    SolverExhausted { explored: usize },
    #[error("invalid timeout `{0}`, expected a finite number of seconds >= 0")]
    InvalidTimeout(f32),
    #[error("search budget exhausted after {expanded} expansions")]
    BudgetExhausted { expanded: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
