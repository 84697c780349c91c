use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StorageError {
    #[snafu(display("session storage is unavailable at {stage}"))]
    Unavailable { stage: &'static str },
    #[snafu(display("session storage access for key '{key}' was denied at {stage}"))]
    Denied { stage: &'static str, key: &'static str },
    #[snafu(display("failed to serialize context for key '{key}'"))]
    SerializeContext {
        stage: &'static str,
        key: &'static str,
        source: serde_json::Error,
    },
    #[snafu(display("stored value under key '{key}' is not valid JSON"))]
    CorruptContext {
        stage: &'static str,
        key: &'static str,
        source: serde_json::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;
