#![forbid(unsafe_code)]

//! The immutable plan document handed to the serializer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::PlanContext;
use crate::plan::extension::ExtensionPayload;
use crate::plan::mapping::{assemble_mappings, FunctionMapping};
use crate::plan::relation::RelationNode;
use crate::plan::schema::OutputSchema;

/// Complete, engine-neutral description of one query's execution plan.
///
/// A document is constructed once and never mutated; it owns its mapping
/// and relation sequences by value and holds no reference back to the
/// context that produced it, so it stays valid after that context is
/// dropped. Being immutable, it is safe to share read-only across threads
/// (e.g. a serializer and a logger at once).
///
/// `output_schema` and `extension` are genuinely optional: when unset they
/// are absent from the serialized form rather than encoded as empty
/// placeholders, which matters for receivers that distinguish the two.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    function_mappings: Vec<FunctionMapping>,
    relations: Vec<RelationNode>,
    output_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    output_schema: Option<OutputSchema>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    extension: Option<ExtensionPayload>,
}

impl PlanDocument {
    /// Assembles a minimal document from already-built pieces.
    ///
    /// No schema or extension is attached and no validation is performed
    /// beyond what the piece types themselves enforce.
    pub fn from_parts(
        function_mappings: Vec<FunctionMapping>,
        relations: Vec<RelationNode>,
        output_names: Vec<String>,
    ) -> Self {
        Self {
            function_mappings,
            relations,
            output_names,
            output_schema: None,
            extension: None,
        }
    }

    /// Assembles a document carrying only a side-channel payload.
    ///
    /// Used for documents with no executable pipeline at all, such as a
    /// capability announcement: mappings, relations, and output names are
    /// all empty and no schema is attached.
    pub fn extension_only(extension: ExtensionPayload) -> Self {
        Self {
            function_mappings: Vec::new(),
            relations: Vec::new(),
            output_names: Vec::new(),
            output_schema: None,
            extension: Some(extension),
        }
    }

    /// Assembles a document from a context's registered functions.
    ///
    /// Snapshots the context's registry, converts it into the mapping
    /// table in registration order, and combines it with the given
    /// relations and output names. Schema and extension stay unset; use
    /// [`PlanBuilder`](crate::plan::builder::PlanBuilder) to attach them.
    pub fn from_context(
        context: &PlanContext,
        relations: Vec<RelationNode>,
        output_names: Vec<String>,
    ) -> Self {
        let mappings = assemble_mappings(context.registered_functions());
        debug!(
            mappings = mappings.len(),
            relations = relations.len(),
            output_names = output_names.len(),
            "plan.assemble.from_context"
        );
        Self::from_parts(mappings, relations, output_names)
    }

    /// [`from_context`](Self::from_context) with output names defaulted to
    /// an empty sequence.
    pub fn from_context_minimal(context: &PlanContext, relations: Vec<RelationNode>) -> Self {
        Self::from_context(context, relations, Vec::new())
    }

    /// The canonical empty plan: no mappings, relations, or output names.
    ///
    /// Serves as a placeholder where a well-typed document is required
    /// before there is anything to transmit. Repeated calls produce
    /// value-equal documents.
    pub fn empty() -> Self {
        Self::from_context(&PlanContext::new(), Vec::new(), Vec::new())
    }

    /// Function mappings in anchor-declaration order.
    pub fn function_mappings(&self) -> &[FunctionMapping] {
        &self.function_mappings
    }

    /// Root relation trees, one per output pipeline.
    pub fn relations(&self) -> &[RelationNode] {
        &self.relations
    }

    /// Labels for the final output columns.
    pub fn output_names(&self) -> &[String] {
        &self.output_names
    }

    /// Explicit output schema, if one was attached.
    pub fn output_schema(&self) -> Option<&OutputSchema> {
        self.output_schema.as_ref()
    }

    /// Side-channel payload, if one was attached.
    pub fn extension(&self) -> Option<&ExtensionPayload> {
        self.extension.as_ref()
    }

    pub(crate) fn with_optional(
        function_mappings: Vec<FunctionMapping>,
        relations: Vec<RelationNode>,
        output_names: Vec<String>,
        output_schema: Option<OutputSchema>,
        extension: Option<ExtensionPayload>,
    ) -> Self {
        Self {
            function_mappings,
            relations,
            output_names,
            output_schema,
            extension,
        }
    }
}
