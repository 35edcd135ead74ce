//! JavaScript Symbol primitive.
//!
//! Every call to [`Symbol::new`] yields a value distinct from all others,
//! even when the descriptions match, like `Symbol('Hi') !== Symbol('Hi')`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A unique symbol with an optional description
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    /// Create a fresh symbol
    pub fn new(description: Option<&str>) -> Self {
        Symbol {
            id: SYMBOL_COUNTER.fetch_add(1, Ordering::Relaxed),
            description: description.map(str::to_string),
        }
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}
