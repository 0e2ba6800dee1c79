//! # chorus-core
//!
//! Subscription membership and state tracking for the Chorus realtime client.
//!
//! This crate is the client's single source of truth for what it is
//! subscribed to:
//!
//! - **SubscriptionRegistry** - Channels, groups, and presence feeds behind one lock
//! - **SubscriptionItem** - A subscribed entry and its optional state payload
//! - **MembershipSnapshot** - One coherent view of the registry per network call
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────────┐     ┌────────────────┐
//! │ operation        │────▶│ SubscriptionRegistry │◀────│ subscribe loop │
//! │ builders         │     │ (one lock over four  │     │ (one snapshot  │
//! │ (sub/state/unsub)│     │  membership maps)    │     │  per call)     │
//! └──────────────────┘     └──────────────────────┘     └────────────────┘
//! ```
//!
//! The registry performs no I/O and never suspends. Every operation is a
//! short, bounded in-memory mutation or copy-out, safe to call from any
//! thread or task.

pub mod registry;
pub mod subscription;

pub use registry::{MembershipSnapshot, SubscriptionRegistry};
pub use subscription::SubscriptionItem;
