//! Memoized integer square roots.

use std::cell::RefCell;

/// Append-only table of square roots of small non-negative integers.
///
/// The same small degree counts recur across millions of evaluations, so
/// the roots are computed once and reread from a dense table. The table is
/// an explicit dependency of the evaluation context rather than a process
/// global: tests substitute a fresh instance, and concurrent chains decide
/// for themselves whether to share a precomputed one.
///
/// Interior mutability via `RefCell` makes the type `!Sync`; populating it
/// from multiple threads requires external synchronization or a
/// precomputation pass before the threads start.
#[derive(Debug)]
pub struct SqrtTable {
    values: RefCell<Vec<f64>>,
}

impl SqrtTable {
    pub fn new() -> Self {
        Self {
            values: RefCell::new(Vec::new()),
        }
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    /// The square root of `n`, memoized on first request.
    pub fn get(&self, n: u32) -> f64 {
        {
            let values = self.values.borrow();
            if let Some(&root) = values.get(n as usize) {
                return root;
            }
        }
        let mut values = self.values.borrow_mut();
        let target = n as usize;
        for i in values.len()..=target {
            values.push((i as f64).sqrt());
        }
        values[target]
    }
}

impl Default for SqrtTable {
    fn default() -> Self {
        Self::new()
    }
}
