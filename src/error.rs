#![forbid(unsafe_code)]

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Structured errors emitted during plan assembly.
///
/// Every failure aborts the construction call that raised it; no partial
/// document is ever returned. Callers never need to retry — each variant
/// signals a programming error in how the builder was configured.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A context-style build was requested but no mapping source was
    /// configured. Surfaced before any relation or output-name input is
    /// examined, so an absent context can never silently yield a document
    /// with empty function mappings.
    #[error("plan assembly requires a query context or an explicit mapping list")]
    MissingContext,
    /// Both a query context and an explicit mapping list were configured.
    /// The two sources are mutually exclusive; the builder cannot decide
    /// which one the caller meant.
    #[error("query context and explicit mappings are mutually exclusive")]
    AmbiguousMappingSource,
    /// An explicitly supplied mapping list reuses a name or anchor. The
    /// registry path guarantees uniqueness itself; this is only checked
    /// for lists that bypass the registry.
    #[error("duplicate function mapping '{name}' (anchor {anchor})")]
    InconsistentMapping {
        /// Function name of the offending entry.
        name: String,
        /// Anchor carried by the offending entry.
        anchor: u64,
    },
}
