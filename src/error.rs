use std::{error::Error as StdError, io, path::PathBuf};
use thiserror::Error;

/// Failures of the `suninfo` pipeline.
///
/// Every variant renders as the complete one-line diagnostic that is shown to
/// the user, label included.
#[derive(Error, Debug)]
pub enum AppError {
    /// The session store could not produce a session
    #[error("Error loading session: {0}")]
    SessionLoad(#[from] SessionError),

    /// The session holds no saved location to query
    #[error("Error loading session: no saved location exists")]
    EmptyLocationList,

    /// The request could not be built (e.g. malformed URL)
    #[error("Error creating request: {}", with_causes(.0))]
    RequestConstruction(#[source] reqwest::Error),

    /// Network or connection failure while sending the request
    #[error("Error making request: {}", with_causes(.0))]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read completely
    #[error("Error reading response: {}", with_causes(.0))]
    ResponseRead(#[source] reqwest::Error),

    /// The body is not the expected JSON object
    #[error("Error unmarshaling JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures of the on-disk session store.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no saved session found at {}, log in first", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// reqwest keeps the underlying cause (refused connection, DNS failure...) out
// of its own message
fn with_causes(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
