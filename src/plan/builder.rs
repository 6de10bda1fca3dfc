#![forbid(unsafe_code)]

//! Fluent construction surface for plan documents.

use tracing::debug;

use crate::context::PlanContext;
use crate::error::{PlanError, Result};
use crate::plan::document::PlanDocument;
use crate::plan::extension::ExtensionPayload;
use crate::plan::mapping::{assemble_mappings, duplicate_mapping, FunctionMapping};
use crate::plan::relation::RelationNode;
use crate::plan::schema::OutputSchema;

/// Assembles a [`PlanDocument`] from explicitly optional pieces.
///
/// Every field may be left unset except the mapping source: exactly one of
/// [`context`](Self::context) (the registry is snapshotted when
/// [`build`](Self::build) runs) or [`mappings`](Self::mappings) (a
/// pre-built list that bypasses the registry) must be configured.
/// [`build`](Self::build) fails with [`PlanError::MissingContext`] when
/// neither is set and [`PlanError::AmbiguousMappingSource`] when both are,
/// in each case before any relation or output-name input is looked at.
///
/// ```
/// use planwire::{PlanBuilder, PlanContext};
///
/// let ctx = PlanContext::new();
/// ctx.register_function("add_int");
/// let doc = PlanBuilder::new()
///     .context(&ctx)
///     .output_names(["total"])
///     .build()
///     .expect("one mapping source is configured");
/// assert_eq!(doc.function_mappings().len(), 1);
/// ```
#[derive(Default)]
pub struct PlanBuilder<'a> {
    context: Option<&'a PlanContext>,
    mappings: Option<Vec<FunctionMapping>>,
    relations: Vec<RelationNode>,
    output_names: Vec<String>,
    output_schema: Option<OutputSchema>,
    extension: Option<ExtensionPayload>,
}

impl<'a> PlanBuilder<'a> {
    /// Creates a builder with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sources function mappings from a query context.
    ///
    /// The registry is read once, inside `build`, so the document reflects
    /// a consistent snapshot of whatever was registered by that moment.
    pub fn context(mut self, context: &'a PlanContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Supplies a pre-built mapping list, bypassing the registry.
    ///
    /// Unlike a context snapshot, an explicit list has not passed through
    /// the registry's uniqueness guarantee, so `build` verifies that no
    /// name or anchor repeats.
    pub fn mappings(mut self, mappings: Vec<FunctionMapping>) -> Self {
        self.mappings = Some(mappings);
        self
    }

    /// Sets the plan's root relation trees.
    pub fn relations(mut self, relations: Vec<RelationNode>) -> Self {
        self.relations = relations;
        self
    }

    /// Appends one root relation tree.
    pub fn relation(mut self, relation: RelationNode) -> Self {
        self.relations.push(relation);
        self
    }

    /// Sets the output column labels.
    pub fn output_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Attaches an explicit output schema.
    pub fn output_schema(mut self, schema: OutputSchema) -> Self {
        self.output_schema = Some(schema);
        self
    }

    /// Attaches a side-channel payload.
    pub fn extension(mut self, extension: ExtensionPayload) -> Self {
        self.extension = Some(extension);
        self
    }

    /// Assembles the document.
    ///
    /// # Errors
    ///
    /// [`PlanError::MissingContext`] when no mapping source is configured,
    /// [`PlanError::AmbiguousMappingSource`] when both are, and
    /// [`PlanError::InconsistentMapping`] when an explicit mapping list
    /// repeats a name or anchor.
    pub fn build(self) -> Result<PlanDocument> {
        let mappings = match (self.context, self.mappings) {
            (None, None) => return Err(PlanError::MissingContext),
            (Some(_), Some(_)) => return Err(PlanError::AmbiguousMappingSource),
            (Some(context), None) => assemble_mappings(context.registered_functions()),
            (None, Some(mappings)) => {
                if let Some(dup) = duplicate_mapping(&mappings) {
                    return Err(PlanError::InconsistentMapping {
                        name: dup.name.clone(),
                        anchor: dup.anchor,
                    });
                }
                mappings
            }
        };
        debug!(
            mappings = mappings.len(),
            relations = self.relations.len(),
            output_names = self.output_names.len(),
            schema = self.output_schema.is_some(),
            extension = self.extension.is_some(),
            "plan.assemble.build"
        );
        Ok(PlanDocument::with_optional(
            mappings,
            self.relations,
            self.output_names,
            self.output_schema,
            self.extension,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::relation::RelOp;
    use crate::plan::schema::{DataType, Field};

    fn scan(table: &str) -> RelationNode {
        RelationNode::new(RelOp::Scan {
            table: table.to_owned(),
            columns: vec!["id".to_owned()],
        })
    }

    #[test]
    fn no_mapping_source_fails_before_other_inputs_matter() {
        for builder in [
            PlanBuilder::new(),
            PlanBuilder::new().relation(scan("t")),
            PlanBuilder::new().output_names(["a"]),
            PlanBuilder::new()
                .relation(scan("t"))
                .output_names(["a"])
                .extension(ExtensionPayload::default()),
        ] {
            assert_eq!(builder.build().unwrap_err(), PlanError::MissingContext);
        }
    }

    #[test]
    fn both_mapping_sources_are_rejected() {
        let ctx = PlanContext::new();
        let err = PlanBuilder::new()
            .context(&ctx)
            .mappings(vec![FunctionMapping::new("add_int", 0)])
            .build()
            .unwrap_err();
        assert_eq!(err, PlanError::AmbiguousMappingSource);
    }

    #[test]
    fn explicit_duplicate_anchor_is_rejected() {
        let err = PlanBuilder::new()
            .mappings(vec![
                FunctionMapping::new("add_int", 3),
                FunctionMapping::new("substr", 3),
            ])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::InconsistentMapping {
                name: "substr".to_owned(),
                anchor: 3,
            }
        );
    }

    #[test]
    fn unset_optionals_stay_absent() {
        let ctx = PlanContext::new();
        let doc = PlanBuilder::new()
            .context(&ctx)
            .relation(scan("t"))
            .build()
            .expect("build should succeed");
        assert!(doc.output_schema().is_none());
        assert!(doc.extension().is_none());
    }

    #[test]
    fn schema_and_extension_are_independently_settable() {
        let ctx = PlanContext::new();
        let schema = OutputSchema::new(vec![Field::required("id", DataType::I64)]);

        let with_schema = PlanBuilder::new()
            .context(&ctx)
            .output_schema(schema.clone())
            .build()
            .expect("build should succeed");
        assert_eq!(with_schema.output_schema(), Some(&schema));
        assert!(with_schema.extension().is_none());

        let with_extension = PlanBuilder::new()
            .context(&ctx)
            .extension(ExtensionPayload::enhancement(serde_json::json!(null)))
            .build()
            .expect("build should succeed");
        assert!(with_extension.output_schema().is_none());
        assert!(with_extension.extension().is_some());
    }

    #[test]
    fn context_snapshot_is_taken_at_build_time() {
        let ctx = PlanContext::new();
        let builder = PlanBuilder::new().context(&ctx);
        ctx.register_function("late");
        let doc = builder.build().expect("build should succeed");
        assert_eq!(doc.function_mappings().len(), 1);
        assert_eq!(doc.function_mappings()[0].name, "late");
    }
}
