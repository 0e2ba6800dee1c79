//! # chorus-protocol
//!
//! Operation and presence naming definitions for the Chorus realtime client.
//!
//! This crate defines the structured requests that the client's operation
//! builders hand to the subscription core, along with the presence
//! pseudo-channel naming convention used on the wire.
//!
//! ## Request Types
//!
//! - `SubscribeRequest` - Add channels and groups, optionally with presence
//! - `UnsubscribeRequest` - Remove channels and groups with their presence feeds
//! - `StateRequest` - Attach an opaque state payload to subscribed entries
//!
//! ## Example
//!
//! ```rust
//! use chorus_protocol::{presence, SubscribeRequest};
//!
//! // Build a subscribe request using the chained setters
//! let request = SubscribeRequest::new()
//!     .channels(["chat:lobby"])
//!     .with_presence();
//! assert!(request.presence_enabled);
//!
//! // Presence feeds travel under a suffixed wire name
//! assert_eq!(presence::presence_name("chat:lobby"), "chat:lobby-pnpres");
//! ```

pub mod presence;
pub mod request;

pub use presence::{is_presence_name, presence_name, PRESENCE_SUFFIX};
pub use request::{StateRequest, SubscribeRequest, UnsubscribeRequest};
