// src/sheets/record.rs
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One data row keyed by header name, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`. A repeated key keeps its original position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

// Serialized as a JSON object so downstream templates can use it directly.
impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_key_keeps_position_takes_last_value() {
        let record: Record = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        assert_eq!(record.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(record.get("a"), Some("3"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn serializes_in_header_order() {
        let record: Record = [("slug", "visa"), ("name", "Visa Inc")].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"slug":"visa","name":"Visa Inc"}"#
        );
    }

    #[test]
    fn absent_key_is_none() {
        let record: Record = [("slug", "")].into_iter().collect();
        assert_eq!(record.get("slug"), Some(""));
        assert_eq!(record.get("secret"), None);
        assert!(!record.contains_key("secret"));
    }
}
