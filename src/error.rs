use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PsychroError {
    /// The unit system is missing from, or malformed in, the configuration.
    #[error("Unit system configuration error: {0}")]
    Config(String),

    /// An ordering or range precondition on the inputs is violated
    /// (e.g. wet-bulb above dry-bulb, relative humidity outside [0, 1]).
    #[error("Invalid input: {0}")]
    Domain(String),

    /// A temperature or vapor pressure lies outside the domain of validity
    /// of the saturation equations.
    #[error("Outside range of validity: {0}")]
    Range(String),

    /// An iterative solver did not reach the tolerance in time.
    #[error("Convergence not reached in {solver} after {iterations} iterations")]
    Convergence {
        solver: &'static str,
        iterations: usize,
    },
}

pub type Result<T> = std::result::Result<T, PsychroError>;
