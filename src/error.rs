//! Error taxonomy of the sort pipeline.

/// Errors surfaced by [`crate::pipeline::sort_in_place`].
///
/// The pipeline is all or nothing: an error means no merged output was
/// produced, and since a sort invocation is stateless the caller may simply
/// re-invoke it to retry.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// A parameter was outside its documented domain, nothing was dispatched
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Backing storage for a partition copy or the merge output could not be
    /// obtained
    #[error("allocation failed")]
    Allocation(#[from] std::collections::TryReserveError),
    /// A concurrent sort worker died or a scatter/gather exchange broke down
    #[error("worker failure: {0}")]
    Worker(&'static str),
}
