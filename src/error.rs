use std::{fmt, io};

/// Everything that can abort a generation run.
///
/// There is no partial-success mode: after an `Io` error the output file may
/// be partially written and must be discarded by the caller.
#[derive(Debug)]
pub enum GenError {
    InvalidArgument(String),
    Io(io::Error),
}

impl GenError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        GenError::InvalidArgument(msg.into())
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            GenError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::InvalidArgument(_) => None,
            GenError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for GenError {
    fn from(e: io::Error) -> Self {
        GenError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GenError::invalid("density 1.5 outside [0, 1]");
        assert_eq!(err.to_string(), "invalid argument: density 1.5 outside [0, 1]");

        let err: GenError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.to_string(), "io error: denied");
    }
}
