#![forbid(unsafe_code)]

//! Plan assembly: mapping records, document aggregate, and builders.
//!
//! The document produced here crosses a process or language boundary to a
//! separate execution engine, so it must be self-contained: every function
//! the relation tree invokes is declared up front in the mapping table,
//! and nothing in the document refers back to the producing process.

/// Fluent document construction.
pub mod builder;

/// The immutable plan document.
pub mod document;

/// Opaque side-channel payloads.
pub mod extension;

/// Function-mapping records and registry-snapshot assembly.
pub mod mapping;

/// Relational operator trees.
pub mod relation;

/// Explicit output-schema descriptors.
pub mod schema;

pub use builder::PlanBuilder;
pub use document::PlanDocument;
pub use extension::ExtensionPayload;
pub use mapping::{assemble_mappings, FunctionMapping};
pub use relation::{JoinKind, RelOp, RelationNode, ScalarCall, SortKey};
pub use schema::{DataType, Field, OutputSchema};
