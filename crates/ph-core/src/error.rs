use thiserror::Error;

pub type PhResult<T> = Result<T, PhError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhError {
    /// Value outside the mathematical domain of a log, sqrt or division.
    #[error("Domain error for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PhError::Domain {
            what: "concentration",
            value: -1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("concentration"));
        assert!(msg.contains("-1"));

        let err = PhError::InvalidArg {
            what: "polarity must be 'acid' or 'base'",
        };
        assert!(err.to_string().starts_with("Invalid argument"));
    }
}
