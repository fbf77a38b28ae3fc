//! Map lookup sugar.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::control::Maybe;

/// Total lookup on map types.
///
/// `lookup` is `get` with the absent case expressed as [`Maybe`] instead
/// of [`Option`], so map access slots directly into fold and bind
/// pipelines. Keys are taken as `&K`; for borrowed-key flexibility use
/// the map's own `get` together with [`Maybe::from_option`].
///
/// # Examples
///
/// ```
/// use fallibars::control::Maybe;
/// use fallibars::sequence::MapLookupExt;
/// use std::collections::HashMap;
///
/// let mut ages = HashMap::new();
/// ages.insert("ada".to_string(), 36);
///
/// assert_eq!(ages.lookup(&"ada".to_string()), Maybe::some(&36));
/// assert_eq!(ages.lookup(&"missing".to_string()), Maybe::none());
/// ```
pub trait MapLookupExt<K, V> {
    /// Returns a reference to the value stored for `key`, or none.
    fn lookup(&self, key: &K) -> Maybe<&V>;
}

impl<K, V, S> MapLookupExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn lookup(&self, key: &K) -> Maybe<&V> {
        Maybe::from_option(self.get(key))
    }
}

impl<K, V> MapLookupExt<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn lookup(&self, key: &K) -> Maybe<&V> {
        Maybe::from_option(self.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_lookup() {
        let mut inventory = HashMap::new();
        inventory.insert(7_u32, "bolt");

        assert_eq!(inventory.lookup(&7), Maybe::some(&"bolt"));
        assert_eq!(inventory.lookup(&8), Maybe::none());
    }

    #[test]
    fn test_btree_map_lookup() {
        let mut ranks = BTreeMap::new();
        ranks.insert(String::from("first"), 1);

        assert_eq!(ranks.lookup(&String::from("first")), Maybe::some(&1));
        assert_eq!(ranks.lookup(&String::from("second")), Maybe::none());
    }

    #[test]
    fn test_lookup_feeds_bind_pipelines() {
        let mut settings = HashMap::new();
        settings.insert(String::from("retries"), String::from("3"));

        let retries = settings
            .lookup(&String::from("retries"))
            .and_then(|value| Maybe::from_option(value.parse::<u8>().ok()));
        assert_eq!(retries, Maybe::some(3));
    }
}
