use gateway::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}", .0.user_message())]
    Api(ApiError),
    #[error("not logged in; run `devevents login` first")]
    NotLoggedIn,
    #[error("{0}")]
    InvalidInput(String),
    #[error("cannot locate a home directory; pass --session-file")]
    NoHomeDir,
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// A missing or rejected token becomes a login hint; 422s list their fields.
impl From<ApiError> for CliError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Unauthenticated => Self::NotLoggedIn,
            ApiError::Validation { message, fields } if !fields.is_empty() => {
                let details = fields
                    .iter()
                    .map(|(field, messages)| format!("{field}: {}", messages.join(" ")))
                    .collect::<Vec<_>>()
                    .join("; ");
                Self::InvalidInput(format!("{message} ({details})"))
            }
            other => Self::Api(other),
        }
    }
}
