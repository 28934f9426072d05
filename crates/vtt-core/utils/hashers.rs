//! Hash function utilities for consistent performance across platforms
//!
//! Provides ahash-based maps used for the attribute tables of the conceptual
//! DOM, with `DoS` resistance and consistent performance including on WASM.

use ahash::RandomState;
use std::collections::HashMap;

/// Map type used for string-keyed tables such as element attributes
pub type FastHashMap<K, V> = HashMap<K, V, RandomState>;

/// Create a new `HashMap` with optimized hasher for VTT-RS use cases
///
/// # Example
///
/// ```rust
/// use vtt_core::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<String, String>();
/// map.insert("class".to_string(), "voice".to_string());
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> FastHashMap<K, V> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a new `HashMap` with specific capacity and optimized hasher
///
/// Pre-allocates the specified capacity to avoid rehashing during construction.
#[must_use]
pub fn create_hash_map_with_capacity<K, V>(capacity: usize) -> FastHashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}
