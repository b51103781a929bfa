//! # EntityKit Core
//!
//! Core types shared by every EntityKit crate.
//! Provides the scene model supplied by the design tool, the host
//! collaborator contract, the plugin message protocol and the
//! synchronous event bus that drives report runs.

pub mod error;
pub mod event_bus;
pub mod host;
pub mod message;
pub mod scene;

pub use error::{Error, Result};

pub use event_bus::{
    EventBus, EventBusError, EventCategory, EventFilter, PluginEvent, SubscriptionId,
};

pub use host::{Host, RecordingHost};
pub use message::{PluginMessage, UiCommand};
pub use scene::{
    find_node_mut, AffineMatrix, NodeKind, Paint, PaintKind, Rgb, SceneNode, VectorPath,
};
