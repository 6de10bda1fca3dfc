#![forbid(unsafe_code)]

//! Relational operator trees carried inside a plan document.
//!
//! The assembler treats these as opaque, already-validated units: it stores
//! the ordered root sequence and forwards it unchanged. Operator-level
//! semantic checks (join input compatibility, column arity) belong to the
//! receiving engine.

use serde::{Deserialize, Serialize};

/// One node in a plan's operator tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelationNode {
    /// The relational operator at this node.
    pub op: RelOp,
    /// Child nodes feeding this operator.
    pub inputs: Vec<RelationNode>,
}

impl RelationNode {
    /// Creates a leaf node with no inputs.
    pub fn new(op: RelOp) -> Self {
        Self {
            op,
            inputs: Vec::new(),
        }
    }

    /// Creates a node with the given inputs.
    pub fn with_inputs(op: RelOp, inputs: Vec<RelationNode>) -> Self {
        Self { op, inputs }
    }
}

/// Relational operators expressible in a plan document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RelOp {
    /// Reads a named table, producing the listed columns.
    Scan {
        /// Table identifier as known to the receiving engine.
        table: String,
        /// Column names to produce, in output order.
        columns: Vec<String>,
    },
    /// Keeps rows for which the predicate function returns true.
    Filter {
        /// Predicate invocation, referencing a registered function anchor.
        predicate: ScalarCall,
    },
    /// Emits a subset of input columns by ordinal.
    Project {
        /// Input column ordinals to emit, in output order.
        columns: Vec<u32>,
    },
    /// Joins two inputs on an optional condition.
    Join {
        /// Join variant.
        kind: JoinKind,
        /// Optional join condition; absent means a cross join.
        condition: Option<ScalarCall>,
    },
    /// Groups rows and computes aggregate measures.
    Aggregate {
        /// Grouping column ordinals.
        group_by: Vec<u32>,
        /// Aggregate function invocations, one per output measure.
        measures: Vec<ScalarCall>,
    },
    /// Orders rows by the given keys.
    Sort {
        /// Sort keys, applied left to right.
        keys: Vec<SortKey>,
    },
    /// Skips `offset` rows and emits at most `count`.
    Limit {
        /// Rows to skip.
        offset: u64,
        /// Maximum rows to emit.
        count: u64,
    },
    /// Produces literal rows without reading storage.
    Values {
        /// Literal rows, outer vector in emission order.
        rows: Vec<Vec<serde_json::Value>>,
    },
}

/// Invocation of a registered function over input columns.
///
/// The function is referenced by anchor only; the document's mapping table
/// supplies the name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarCall {
    /// Anchor of the invoked function.
    pub function: u64,
    /// Input column ordinals passed as arguments.
    pub arguments: Vec<u32>,
}

impl ScalarCall {
    /// Creates a call to the function behind `function` over `arguments`.
    pub fn new(function: u64, arguments: Vec<u32>) -> Self {
        Self {
            function,
            arguments,
        }
    }
}

/// Join variants understood by receivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    /// Rows matching on both sides.
    Inner,
    /// All left rows, right side padded with nulls.
    Left,
    /// All right rows, left side padded with nulls.
    Right,
    /// All rows from both sides.
    Full,
}

/// One sort key within a [`RelOp::Sort`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Input column ordinal to order by.
    pub column: u32,
    /// Descending order when true.
    pub descending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_nest_through_inputs() {
        let scan = RelationNode::new(RelOp::Scan {
            table: "users".to_owned(),
            columns: vec!["id".to_owned(), "age".to_owned()],
        });
        let filter = RelationNode::with_inputs(
            RelOp::Filter {
                predicate: ScalarCall::new(0, vec![1]),
            },
            vec![scan],
        );
        assert_eq!(filter.inputs.len(), 1);
        assert!(filter.inputs[0].inputs.is_empty());
    }
}
