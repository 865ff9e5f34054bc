#[derive(Debug)]
pub enum WindGridError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    CsvError(csv::Error),
    InfeasibleInstance(String),
    InvariantViolation(String),
    InvalidConfig(String),
}

impl From<std::io::Error> for WindGridError {
    fn from(err: std::io::Error) -> Self {
        WindGridError::IoError(err)
    }
}

impl From<serde_json::Error> for WindGridError {
    fn from(err: serde_json::Error) -> Self {
        WindGridError::JsonError(err)
    }
}

impl From<csv::Error> for WindGridError {
    fn from(err: csv::Error) -> Self {
        WindGridError::CsvError(err)
    }
}

impl std::fmt::Display for WindGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindGridError::IoError(e) => write!(f, "IO error: {}", e),
            WindGridError::JsonError(e) => write!(f, "JSON error: {}", e),
            WindGridError::CsvError(e) => write!(f, "CSV error: {}", e),
            WindGridError::InfeasibleInstance(s) => write!(f, "Infeasible instance: {}", s),
            WindGridError::InvariantViolation(s) => write!(f, "Invariant violation: {}", s),
            WindGridError::InvalidConfig(s) => write!(f, "Invalid search configuration: {}", s),
        }
    }
}

impl std::error::Error for WindGridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WindGridError::IoError(e) => Some(e),
            WindGridError::JsonError(e) => Some(e),
            WindGridError::CsvError(e) => Some(e),
            _ => None,
        }
    }
}
