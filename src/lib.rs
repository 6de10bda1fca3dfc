//! Engine-neutral query plan documents.
//!
//! `planwire` assembles the serializable description of a query execution
//! plan that one process hands to a separate execution engine: a tree of
//! relational operators plus the metadata the receiver needs to run it —
//! output column names, an optional explicit schema, an optional extension
//! payload, and a table mapping every externally-invoked function name to
//! a small stable integer anchor.
//!
//! The typical flow: operator builders register the functions they invoke
//! with a [`PlanContext`], receiving anchors to embed in the relation
//! tree; plan assembly then snapshots the registry and combines it with
//! the relation roots into an immutable [`PlanDocument`] ready for
//! serialization.

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod plan;

pub use context::PlanContext;
pub use error::{PlanError, Result};
pub use plan::{
    assemble_mappings, DataType, ExtensionPayload, Field, FunctionMapping, JoinKind, OutputSchema,
    PlanBuilder, PlanDocument, RelOp, RelationNode, ScalarCall, SortKey,
};
