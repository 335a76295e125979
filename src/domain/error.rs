// Error taxonomy shared by the loader and the domain functions
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Source file missing or unreadable. Fatal at startup.
    #[error("data source {}: {source}", path.display())]
    DataSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Expected column absent, or a cell that would not parse. Fatal at startup.
    #[error("schema error in {}: {message}", path.display())]
    Schema { path: PathBuf, message: String },

    /// An operation that is undefined over zero records.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}
