//! Presence pseudo-channel naming.
//!
//! Presence events for a channel or channel group arrive on a companion
//! feed whose wire name is the primary name with a fixed suffix appended.
//! The suffix is part of the wire contract and must match byte for byte.

/// Suffix appended to a primary name to form its presence feed name.
pub const PRESENCE_SUFFIX: &str = "-pnpres";

/// Derive the wire name of the presence feed for a channel or group.
#[must_use]
pub fn presence_name(name: &str) -> String {
    format!("{}{}", name, PRESENCE_SUFFIX)
}

/// Check whether a wire name refers to a presence feed.
#[must_use]
pub fn is_presence_name(name: &str) -> bool {
    name.ends_with(PRESENCE_SUFFIX)
}

/// Strip the presence suffix, returning the primary name.
///
/// Returns `None` if the name is not a presence feed name.
#[must_use]
pub fn strip_presence_suffix(name: &str) -> Option<&str> {
    name.strip_suffix(PRESENCE_SUFFIX)
}
