use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// No node carries the requested label, or the chart has no root at all.
    #[error("node not found: {0}")]
    NotFound(String),
}

pub type ChartResult<T> = Result<T, ChartError>;
