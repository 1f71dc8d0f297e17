use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("benchmark file I/O error for {path}: {source}")]
    BenchmarkFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("benchmark file parse error: {0}")]
    BenchmarkFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Failure reported by a collaborator when asked for its payload.
///
/// Every variant is caught at the module boundary by the orchestrator and
/// replaced with the module's static fallback; none of them abort a run.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("connectivity check failed: {0}")]
    Connectivity(String),

    #[error("provider timed out after {0}s")]
    Timeout(u64),

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("provider failed: {0}")]
    Failed(String),
}
