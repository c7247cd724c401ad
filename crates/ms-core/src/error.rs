use thiserror::Error;

pub type MotionResult<T> = Result<T, MotionError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("Invalid argument: {what} (value={value})")]
    InvalidArgument { what: &'static str, value: f64 },

    #[error("Unable to calculate time: insufficient information provided")]
    InsufficientData,

    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_quantity() {
        let err = MotionError::InvalidArgument {
            what: "time can't be negative",
            value: -1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("time can't be negative"));
        assert!(msg.contains("-1"));

        let err = MotionError::DivisionByZero {
            what: "acceleration",
        };
        assert_eq!(err.to_string(), "Division by zero: acceleration");
    }
}
