//! # Event Bus Module
//!
//! Synchronous publish/subscribe for the notifications that drive the
//! plugin: the initial load, selection changes and UI commands.
//!
//! Handlers run to completion on the publishing thread, one after the
//! other, so a report run is never interleaved with another.
//!
//! ## Usage
//!
//! ```rust
//! use entitykit_core::event_bus::{EventBus, EventCategory, EventFilter, PluginEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Selection]),
//!     |event| println!("refresh after {:?}", event),
//! );
//!
//! bus.publish(PluginEvent::SelectionChanged).unwrap();
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
