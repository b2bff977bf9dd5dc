//! Lifecycle events: types and payload.
//!
//! This module groups the event **data model** emitted by the scheduler as it
//! drives turns and rounds. Delivery is handled by
//! [`SubscriberSet`](crate::subscribers::SubscriberSet).
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//!
//! ## Quick reference
//! - **Publisher**: `TurnScheduler` (the only component that emits).
//! - **Consumers**: anything implementing [`Subscribe`](crate::subscribers::Subscribe),
//!   registered on the scheduler and invoked synchronously in subscription order.

mod event;

pub use event::{Event, EventKind};
