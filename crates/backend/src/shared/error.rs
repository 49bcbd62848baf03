use thiserror::Error;

/// Failures of one dashboard render.
///
/// None of these are retried and none fall back to stale data; every render
/// re-queries the store and either succeeds or surfaces one of these.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The analytical store is unreachable or the query failed, including
    /// timeouts.
    #[error("store connection failed: {0}")]
    Connection(String),

    /// The returned rows do not match the 19-column schema contract.
    /// Indicates schema drift in the store, never coerced silently.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A summary scalar was requested over zero filtered rows.
    #[error("aggregation over empty result: {0}")]
    EmptyResultAggregation(&'static str),
}
