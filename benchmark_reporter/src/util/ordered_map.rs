//!
//! The insertion-ordered string-keyed map.
//!

use std::fmt;
use std::marker::PhantomData;

use serde::de::MapAccess;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;

///
/// The insertion-ordered string-keyed map.
///
/// Report rows and column groups follow the order in which configurations and
/// workloads were first seen, so the map keeps its entries in insertion order.
/// Lookups are linear, which is fine for the handful of keys a report holds.
///
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    /// The entries in insertion order.
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Creates an empty map with preallocated space for `capacity` entries.
    ///
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    ///
    /// Inserts a value, returning the previous one if the key was present.
    ///
    /// A replaced entry keeps its position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use benchmark_reporter::util::ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("b".to_owned(), 1);
    /// map.insert("a".to_owned(), 2);
    /// assert_eq!(map.insert("b".to_owned(), 3), Some(1));
    /// assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    /// assert_eq!(map.get("b"), Some(&3));
    /// ```
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    ///
    /// Returns the value stored under `key`.
    ///
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    ///
    /// Returns a mutable reference to the value stored under `key`.
    ///
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    ///
    /// Returns the first entry.
    ///
    pub fn first(&self) -> Option<(&str, &V)> {
        self.entries
            .first()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    ///
    /// Inserts all entries of `other`, overriding existing keys.
    ///
    /// Returns the keys that were overridden.
    ///
    /// # Example
    ///
    /// ```rust
    /// use benchmark_reporter::util::ordered_map::OrderedMap;
    ///
    /// let mut first: OrderedMap<u32> = [("x".to_owned(), 1), ("y".to_owned(), 2)]
    ///     .into_iter()
    ///     .collect();
    /// let second: OrderedMap<u32> = [("z".to_owned(), 3), ("x".to_owned(), 10)]
    ///     .into_iter()
    ///     .collect();
    /// let overridden = first.merge(second);
    /// assert_eq!(overridden, vec!["x".to_owned()]);
    /// assert_eq!(
    ///     first.iter().collect::<Vec<_>>(),
    ///     vec![("x", &10), ("y", &2), ("z", &3)]
    /// );
    /// ```
    pub fn merge(&mut self, other: Self) -> Vec<String> {
        let mut overridden = Vec::new();
        for (key, value) in other.entries.into_iter() {
            if self.insert(key.clone(), value).is_some() {
                overridden.push(key);
            }
        }
        overridden
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'de, V> Deserialize<'de> for OrderedMap<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

///
/// Collects JSON object members in document order.
///
struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for OrderedMapVisitor<V>
where
    V: Deserialize<'de>,
{
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or_default());
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedMap;

    #[test]
    fn deserialize_keeps_document_order() {
        let map: OrderedMap<u32> =
            serde_json::from_str(r#"{ "zeta": 1, "alpha": 2, "mid": 3 }"#).expect("Valid JSON");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn deserialize_duplicate_key_last_wins() {
        let map: OrderedMap<u32> =
            serde_json::from_str(r#"{ "a": 1, "b": 2, "a": 3 }"#).expect("Valid JSON");
        assert_eq!(map.keys().count(), 2);
        assert_eq!(map.get("a"), Some(&3));
        assert_eq!(map.first(), Some(("a", &3)));
    }

    #[test]
    fn deserialize_rejects_non_object() {
        assert!(serde_json::from_str::<OrderedMap<u32>>("[1, 2]").is_err());
    }
}
