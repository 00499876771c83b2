use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

/// String-keyed map that iterates in insertion order. Deserializing from a
/// JSON object keeps the document order of its keys.
#[derive(Debug, Clone)]
pub struct OrderedMap<T> {
    map: HashMap<String, T>,
    keys: Vec<String>,
}

impl<T> Default for OrderedMap<T> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            keys: Vec::new(),
        }
    }
}

impl<T> OrderedMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.keys.iter().filter_map(|key| {
            self.map.get(key).map(|value| (key.as_str(), value))
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }

    pub fn insert(&mut self, key: String, value: T) -> Option<T> {
        if !self.map.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.map.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<'de, T> Deserialize<'de> for OrderedMap<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for OrderedMapVisitor<T>
        where
            T: Deserialize<'de>,
        {
            type Value = OrderedMap<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map with string keys")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry::<String, T>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedMap;

    #[test]
    fn iterates_in_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("c".to_owned(), 3);
        map.insert("a".to_owned(), 1);
        map.insert("b".to_owned(), 2);

        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["c", "a", "b"]);
    }

    #[test]
    fn reinserting_keeps_the_original_position() {
        let mut map = OrderedMap::new();
        map.insert("a".to_owned(), 1);
        map.insert("b".to_owned(), 2);
        let previous = map.insert("a".to_owned(), 10);

        assert_eq!(previous, Some(1));
        assert_eq!(map.len(), 2);
        let entries: Vec<(&str, &i32)> = map.iter().collect();
        assert_eq!(entries, [("a", &10), ("b", &2)]);
    }

    #[test]
    fn looks_up_by_key() {
        let mut map = OrderedMap::new();
        map.insert("a".to_owned(), 1);

        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn deserializes_preserving_document_order() {
        let map: OrderedMap<u32> = serde_json::from_str(r#"{"z": 1, "m": 2, "a": 3}"#).unwrap();

        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["z", "m", "a"]);
    }

    #[test]
    fn empty_map_has_no_entries() {
        let map: OrderedMap<u32> = serde_json::from_str("{}").unwrap();

        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }
}
