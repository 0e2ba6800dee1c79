//! Subscribed entries and the map helpers behind the registry.
//!
//! Every channel, channel group, or presence feed the client is subscribed
//! to is recorded as a [`SubscriptionItem`]. The registry keeps four maps of
//! these; the helpers here give all four the same upsert, remove, and state
//! assignment behavior.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A single subscribed channel or channel group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionItem {
    /// Entry name. Fixed for the lifetime of the item.
    name: String,
    /// Opaque state payload attached to this entry, if any.
    state: Option<Value>,
}

impl SubscriptionItem {
    /// Create a new item with no state attached.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: None,
        }
    }

    /// Get the entry name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the attached state payload, if any.
    #[must_use]
    pub fn state(&self) -> Option<&Value> {
        self.state.as_ref()
    }

    /// Check if a state payload is attached.
    #[must_use]
    pub fn has_state(&self) -> bool {
        self.state.is_some()
    }

    /// Attach or replace the state payload.
    pub fn set_state(&mut self, state: Value) {
        self.state = Some(state);
    }
}

/// Map shape shared by all four membership stores.
pub(crate) type ItemMap = HashMap<String, SubscriptionItem>;

/// Insert a fresh, stateless item for each name.
///
/// An existing item of the same name is replaced, so resubscribing an entry
/// drops any state assigned to it earlier.
pub(crate) fn upsert_items(map: &mut ItemMap, names: &[String]) {
    for name in names {
        map.insert(name.clone(), SubscriptionItem::new(name.clone()));
    }
}

/// Remove each name from a primary map and its presence companion.
pub(crate) fn remove_pair(primary: &mut ItemMap, presence: &mut ItemMap, names: &[String]) {
    for name in names {
        primary.remove(name);
        presence.remove(name);
    }
}

/// Overwrite the state of each named item present in the map.
///
/// Names with no entry are skipped; assigning state never subscribes.
pub(crate) fn assign_state(map: &mut ItemMap, names: &[String], state: &Value) {
    for name in names {
        if let Some(item) = map.get_mut(name) {
            item.set_state(state.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_new_item_has_no_state() {
        let item = SubscriptionItem::new("room1");
        assert_eq!(item.name(), "room1");
        assert!(!item.has_state());
        assert_eq!(item.state(), None);
    }

    #[test]
    fn test_set_state_replaces_payload() {
        let mut item = SubscriptionItem::new("room1");
        item.set_state(json!({ "mood": "happy" }));
        item.set_state(json!({ "mood": "grumpy" }));
        assert_eq!(item.state(), Some(&json!({ "mood": "grumpy" })));
    }

    #[test]
    fn test_upsert_replaces_existing_item() {
        let mut map = ItemMap::new();
        upsert_items(&mut map, &names(&["room1"]));
        map.get_mut("room1").unwrap().set_state(json!(42));

        upsert_items(&mut map, &names(&["room1"]));
        assert!(!map["room1"].has_state());
    }

    #[test]
    fn test_remove_pair_clears_both_maps() {
        let mut primary = ItemMap::new();
        let mut presence = ItemMap::new();
        upsert_items(&mut primary, &names(&["room1", "room2"]));
        upsert_items(&mut presence, &names(&["room1"]));

        remove_pair(&mut primary, &mut presence, &names(&["room1", "missing"]));
        assert!(!primary.contains_key("room1"));
        assert!(presence.is_empty());
        assert!(primary.contains_key("room2"));
    }

    #[test]
    fn test_assign_state_skips_unknown_names() {
        let mut map = ItemMap::new();
        upsert_items(&mut map, &names(&["room1"]));

        assign_state(&mut map, &names(&["room1", "missing"]), &json!({ "a": 1 }));
        assert_eq!(map["room1"].state(), Some(&json!({ "a": 1 })));
        assert_eq!(map.len(), 1);
    }
}
