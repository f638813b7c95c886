use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A `use_*` helper ran outside the owner tree that provides the value.
    #[error("{0} was not provided to this part of the view tree")]
    MissingContext(&'static str),
    #[error("JSON {0}")]
    Json(String),
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_context_names_the_type() {
        let error = AppError::MissingContext("ToggleState");
        assert_eq!(
            error.to_string(),
            "ToggleState was not provided to this part of the view tree"
        );
    }

    #[test]
    fn json_errors_are_flattened() {
        let parse = serde_json::from_str::<bool>("not json").unwrap_err();
        let error: AppError = parse.into();
        assert!(matches!(error, AppError::Json(ref message) if message.starts_with("expected")));
    }
}
