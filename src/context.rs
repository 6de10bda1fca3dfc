#![forbid(unsafe_code)]

//! Per-query plan context owning the function-anchor registry.
//!
//! Relational operators reference externally-invoked functions by a small
//! integer anchor rather than by name. The context hands out those anchors
//! during plan construction and later provides the snapshot the assembler
//! turns into the document's mapping table.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// Per-query accumulator of function-name → anchor assignments.
///
/// Registration takes `&self`; the registry lives behind a mutex so that
/// operator builders running on different threads can register concurrently.
/// [`registered_functions`](Self::registered_functions) reads the whole
/// table in one critical section, giving plan assembly a consistent
/// snapshot even while registrations continue elsewhere.
#[derive(Debug, Default)]
pub struct PlanContext {
    registry: Mutex<FunctionRegistry>,
}

/// Registration-ordered name/anchor table.
///
/// The `entries` vector is the source of truth for iteration order; the
/// hash map is only a name index and is never iterated. Receivers correlate
/// anchor declarations with log output by position, so registration order
/// must survive into the document.
#[derive(Debug, Default)]
struct FunctionRegistry {
    entries: Vec<(String, u64)>,
    index: FxHashMap<String, u64>,
}

impl PlanContext {
    /// Creates a context with no registered functions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the anchor for `name`, assigning the next unused anchor on
    /// first registration. Re-registering a name is idempotent and returns
    /// the anchor assigned the first time.
    pub fn register_function(&self, name: &str) -> u64 {
        let mut registry = self.registry.lock();
        if let Some(&anchor) = registry.index.get(name) {
            return anchor;
        }
        let anchor = registry.entries.len() as u64;
        registry.entries.push((name.to_owned(), anchor));
        registry.index.insert(name.to_owned(), anchor);
        anchor
    }

    /// Snapshot of all registrations so far, in registration order.
    ///
    /// The read is atomic relative to concurrent [`register_function`]
    /// calls: either a registration is fully visible in the snapshot or
    /// not present at all.
    ///
    /// [`register_function`]: Self::register_function
    pub fn registered_functions(&self) -> Vec<(String, u64)> {
        self.registry.lock().entries.clone()
    }

    /// Number of distinct functions registered so far.
    pub fn function_count(&self) -> usize {
        self.registry.lock().entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_dense_and_ordered() {
        let ctx = PlanContext::new();
        assert_eq!(ctx.register_function("add_int"), 0);
        assert_eq!(ctx.register_function("substr"), 1);
        assert_eq!(ctx.register_function("upper"), 2);
        assert_eq!(
            ctx.registered_functions(),
            vec![
                ("add_int".to_owned(), 0),
                ("substr".to_owned(), 1),
                ("upper".to_owned(), 2),
            ]
        );
    }

    #[test]
    fn reregistration_is_idempotent() {
        let ctx = PlanContext::new();
        let first = ctx.register_function("substr");
        ctx.register_function("add_int");
        assert_eq!(ctx.register_function("substr"), first);
        assert_eq!(ctx.function_count(), 2);
    }

    #[test]
    fn snapshot_is_detached_from_later_registrations() {
        let ctx = PlanContext::new();
        ctx.register_function("substr");
        let snapshot = ctx.registered_functions();
        ctx.register_function("upper");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(ctx.function_count(), 2);
    }
}
