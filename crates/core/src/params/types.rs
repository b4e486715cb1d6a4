use std::collections::HashMap;

/// Flat string parameter store with case-insensitive keys.
///
/// Loaded once at process start and never mutated afterwards. Absent keys
/// resolve to the empty string through [`ParamStore::get`], mirroring how
/// every call site of the external parameter file treats a missing value;
/// [`ParamStore::get_opt`] is available where the distinction matters.
#[derive(Debug, Clone, Default)]
pub struct ParamStore {
    entries: HashMap<String, String>,
}

impl ParamStore {
    /// Builds a store from raw pairs. Keys are folded to lower case; on
    /// duplicate keys the last entry wins.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self { entries }
    }

    /// Looks up a key case-insensitively; absent keys resolve to "".
    pub fn get(&self, key: &str) -> &str {
        self.get_opt(key).unwrap_or("")
    }

    /// Looks up a key case-insensitively.
    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ParamStore {
        ParamStore::from_entries(vec![
            ("InputFolder".to_string(), "/data/in".to_string()),
            ("FormType".to_string(), "Invoice".to_string()),
        ])
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let store = store();
        assert_eq!(store.get("inputfolder"), "/data/in");
        assert_eq!(store.get("INPUTFOLDER"), "/data/in");
        assert_eq!(store.get("InputFolder"), "/data/in");
    }

    #[test]
    fn test_absent_key_resolves_to_empty_string() {
        let store = store();
        assert_eq!(store.get("missing"), "");
        assert!(store.get_opt("missing").is_none());
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let store = ParamStore::from_entries(vec![
            ("Key".to_string(), "first".to_string()),
            ("KEY".to_string(), "second".to_string()),
        ]);
        assert_eq!(store.get("key"), "second");
        assert_eq!(store.len(), 1);
    }
}
