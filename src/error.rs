use thiserror::Error;

/// Failure to retrieve a page. The search orchestrator turns these into an
/// empty result.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failure to turn one listing node into a record. Only that listing is dropped.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("listing #{index} has neither a title nor a detail link")]
    Empty { index: usize },

    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },
}
