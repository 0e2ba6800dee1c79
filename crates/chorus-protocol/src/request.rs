//! Structured requests consumed by the subscription core.
//!
//! The client's operation builders validate user input and hand the core
//! one of these requests. The types here carry data only; the core applies
//! whatever arrives without re-validating names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to subscribe to channels and channel groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    /// Channel names to subscribe to.
    pub channels: Vec<String>,
    /// Channel group names to subscribe to.
    pub channel_groups: Vec<String>,
    /// Whether to also join the presence feed of each named entry.
    pub presence_enabled: bool,
}

impl SubscribeRequest {
    /// Create an empty subscribe request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channels to subscribe to.
    #[must_use]
    pub fn channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    /// Set the channel groups to subscribe to.
    #[must_use]
    pub fn channel_groups<I, S>(mut self, channel_groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channel_groups = channel_groups.into_iter().map(Into::into).collect();
        self
    }

    /// Also join the presence feed of every channel and group in the request.
    #[must_use]
    pub fn with_presence(mut self) -> Self {
        self.presence_enabled = true;
        self
    }

    /// Check if the request names no channels and no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty() && self.channel_groups.is_empty()
    }
}

/// Request to unsubscribe from channels and channel groups.
///
/// Unsubscribing an entry always leaves its presence feed as well; there is
/// no flag because a presence feed never outlives its primary entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnsubscribeRequest {
    /// Channel names to unsubscribe from.
    pub channels: Vec<String>,
    /// Channel group names to unsubscribe from.
    pub channel_groups: Vec<String>,
}

impl UnsubscribeRequest {
    /// Create an empty unsubscribe request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channels to unsubscribe from.
    #[must_use]
    pub fn channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    /// Set the channel groups to unsubscribe from.
    #[must_use]
    pub fn channel_groups<I, S>(mut self, channel_groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channel_groups = channel_groups.into_iter().map(Into::into).collect();
        self
    }

    /// Check if the request names no channels and no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty() && self.channel_groups.is_empty()
    }
}

/// Request to attach a state payload to subscribed channels and groups.
///
/// The payload is opaque to the client; it is stored as-is and echoed back
/// on subscribe and heartbeat calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRequest {
    /// Channel names to attach the state to.
    pub channels: Vec<String>,
    /// Channel group names to attach the state to.
    pub channel_groups: Vec<String>,
    /// Opaque state payload.
    pub state: Value,
}

impl StateRequest {
    /// Create a state request carrying the given payload.
    #[must_use]
    pub fn new(state: Value) -> Self {
        Self {
            channels: Vec::new(),
            channel_groups: Vec::new(),
            state,
        }
    }

    /// Set the channels to attach the state to.
    #[must_use]
    pub fn channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    /// Set the channel groups to attach the state to.
    #[must_use]
    pub fn channel_groups<I, S>(mut self, channel_groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channel_groups = channel_groups.into_iter().map(Into::into).collect();
        self
    }
}
