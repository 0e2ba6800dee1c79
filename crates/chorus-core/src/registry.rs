//! Membership registry for the Chorus client.
//!
//! The registry tracks which channels and channel groups the client is
//! subscribed to, which presence feeds it has joined, and the opaque state
//! payload attached to each entry.

use crate::subscription::{assign_state, remove_pair, upsert_items, ItemMap};
use chorus_protocol::presence::presence_name;
use chorus_protocol::request::{StateRequest, SubscribeRequest, UnsubscribeRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, trace};

/// Membership and state for everything the client is subscribed to.
///
/// Four maps (channels, channel groups, and the presence companion of each)
/// live behind a single lock, so a reader never observes a presence feed
/// without its primary entry or a half-applied request. Operations perform
/// no I/O and never suspend; each one holds the lock for one bounded map
/// pass.
///
/// The registry is shared between caller threads and the background
/// subscribe loop via [`Arc`](std::sync::Arc).
#[derive(Debug)]
pub struct SubscriptionRegistry {
    /// The four membership maps, guarded as a unit.
    inner: Mutex<RegistryInner>,
}

/// Membership maps. Only ever touched while holding the registry lock.
#[derive(Debug, Default)]
struct RegistryInner {
    /// Subscribed channels.
    channels: ItemMap,
    /// Presence feeds joined alongside subscribed channels.
    presence_channels: ItemMap,
    /// Subscribed channel groups.
    groups: ItemMap,
    /// Presence feeds joined alongside subscribed channel groups.
    presence_groups: ItemMap,
}

impl SubscriptionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner::default()),
        }
    }

    /// Apply a subscribe request.
    ///
    /// Every named channel and group gets a fresh, stateless entry. With
    /// presence enabled, a companion entry joins the matching presence map
    /// in the same critical section. Resubscribing an existing name replaces
    /// its entry and drops any state assigned to it earlier.
    pub fn subscribe(&self, request: SubscribeRequest) {
        let mut guard = self.locked();
        let inner = &mut *guard;

        upsert_items(&mut inner.channels, &request.channels);
        if request.presence_enabled {
            upsert_items(&mut inner.presence_channels, &request.channels);
        }
        upsert_items(&mut inner.groups, &request.channel_groups);
        if request.presence_enabled {
            upsert_items(&mut inner.presence_groups, &request.channel_groups);
        }

        debug!(
            channels = request.channels.len(),
            channel_groups = request.channel_groups.len(),
            presence = request.presence_enabled,
            "Subscribed"
        );
    }

    /// Apply a state request.
    ///
    /// Overwrites the state payload of every named channel and group that is
    /// currently subscribed. Names with no entry are skipped, and presence
    /// entries are never touched.
    pub fn set_state(&self, request: StateRequest) {
        let mut guard = self.locked();
        let inner = &mut *guard;

        assign_state(&mut inner.channels, &request.channels, &request.state);
        assign_state(&mut inner.groups, &request.channel_groups, &request.state);

        debug!(
            channels = request.channels.len(),
            channel_groups = request.channel_groups.len(),
            "State assigned"
        );
    }

    /// Apply an unsubscribe request.
    ///
    /// Removes every named channel and group together with its presence
    /// companion in the same critical section. Names that are not subscribed
    /// are skipped.
    pub fn unsubscribe(&self, request: UnsubscribeRequest) {
        let mut guard = self.locked();
        let inner = &mut *guard;

        remove_pair(
            &mut inner.channels,
            &mut inner.presence_channels,
            &request.channels,
        );
        remove_pair(
            &mut inner.groups,
            &mut inner.presence_groups,
            &request.channel_groups,
        );

        debug!(
            channels = request.channels.len(),
            channel_groups = request.channel_groups.len(),
            "Unsubscribed"
        );
    }

    /// Build the per-entry state payload for the next subscribe or heartbeat
    /// call.
    ///
    /// Contains every subscribed channel and channel group that has state
    /// assigned, keyed by name. Presence entries never appear. When the same
    /// name is subscribed as both a channel and a group, the group's state
    /// wins.
    #[must_use]
    pub fn state_payload(&self) -> HashMap<String, Value> {
        let inner = self.locked();
        let payload = state_entries(&inner.channels, &inner.groups);
        trace!(entries = payload.len(), "State payload built");
        payload
    }

    /// List subscribed channel names.
    ///
    /// With `include_presence`, joined presence feeds follow the primary
    /// names under their wire name (primary name plus the presence suffix).
    /// Map iteration order is unspecified; callers must treat the result as
    /// a set.
    #[must_use]
    pub fn channels(&self, include_presence: bool) -> Vec<String> {
        let inner = self.locked();
        member_names(&inner.channels, &inner.presence_channels, include_presence)
    }

    /// List subscribed channel group names.
    ///
    /// Same contract as [`channels`](Self::channels).
    #[must_use]
    pub fn channel_groups(&self, include_presence: bool) -> Vec<String> {
        let inner = self.locked();
        member_names(&inner.groups, &inner.presence_groups, include_presence)
    }

    /// Take one coherent view of the registry.
    ///
    /// The channel list, group list, and state payload are read under a
    /// single lock acquisition, so they always describe the same membership
    /// instant. The subscribe loop takes one snapshot per network call.
    #[must_use]
    pub fn snapshot(&self, include_presence: bool) -> MembershipSnapshot {
        let inner = self.locked();

        let snapshot = MembershipSnapshot {
            channels: member_names(&inner.channels, &inner.presence_channels, include_presence),
            channel_groups: member_names(&inner.groups, &inner.presence_groups, include_presence),
            state: state_entries(&inner.channels, &inner.groups),
        };

        trace!(
            channels = snapshot.channels.len(),
            channel_groups = snapshot.channel_groups.len(),
            "Snapshot taken"
        );
        snapshot
    }

    /// Check whether anything is subscribed.
    ///
    /// True only when all four membership maps are empty. The subscribe loop
    /// stops polling once this holds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let inner = self.locked();
        inner.channels.is_empty()
            && inner.presence_channels.is_empty()
            && inner.groups.is_empty()
            && inner.presence_groups.is_empty()
    }

    /// Check if a channel is subscribed.
    #[must_use]
    pub fn contains_channel(&self, name: &str) -> bool {
        self.locked().channels.contains_key(name)
    }

    /// Check if a channel group is subscribed.
    #[must_use]
    pub fn contains_channel_group(&self, name: &str) -> bool {
        self.locked().groups.contains_key(name)
    }

    /// Remove every subscription in one critical section.
    pub fn clear(&self) {
        let mut guard = self.locked();
        let inner = &mut *guard;

        inner.channels.clear();
        inner.presence_channels.clear();
        inner.groups.clear();
        inner.presence_groups.clear();

        debug!("Cleared all subscriptions");
    }

    /// Acquire the registry lock.
    fn locked(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner
            .lock()
            .expect("subscription registry lock poisoned")
    }
}

impl Default for SubscriptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time copy of the membership.
///
/// Snapshots are plain owned data; mutating the registry afterwards never
/// changes a snapshot already taken.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembershipSnapshot {
    /// Subscribed channel names, presence feeds included when requested.
    pub channels: Vec<String>,
    /// Subscribed channel group names, presence feeds included when requested.
    pub channel_groups: Vec<String>,
    /// State payload keyed by entry name.
    pub state: HashMap<String, Value>,
}

/// Collect primary names, then presence wire names when requested.
fn member_names(primary: &ItemMap, presence: &ItemMap, include_presence: bool) -> Vec<String> {
    let mut names: Vec<String> = primary.keys().cloned().collect();
    if include_presence {
        names.extend(presence.keys().map(|name| presence_name(name)));
    }
    names
}

/// Collect assigned state across both primary maps.
///
/// Groups are visited last, so a group's state wins when the same name is
/// subscribed in both namespaces.
fn state_entries(channels: &ItemMap, groups: &ItemMap) -> HashMap<String, Value> {
    let mut payload = HashMap::new();
    for item in channels.values().chain(groups.values()) {
        if let Some(state) = item.state() {
            payload.insert(item.name().to_string(), state.clone());
        }
    }
    payload
}
