use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Singular matrix: zero pivot at step {step}")]
    SingularMatrix { step: usize },

    #[error("Invalid vector operation: lengths {left} and {right} differ")]
    InvalidVectorOperation { left: usize, right: usize },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    /// Message shown to a person running a solver on a file.
    pub fn user_message(&self) -> String {
        match self {
            SolverError::DimensionMismatch(_) | SolverError::InvalidVectorOperation { .. } => {
                "Incorrect size".into()
            }
            SolverError::SingularMatrix { .. } => "This matrix is degenerate".into(),
            SolverError::Parse { line, message } => format!("Bad input on line {line}: {message}"),
            SolverError::Io(error) => format!("Cannot read input: {error}"),
        }
    }

    pub fn is_singular(&self) -> bool {
        matches!(self, SolverError::SingularMatrix { .. })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
