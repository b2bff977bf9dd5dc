//! # Event subscribers for the turn scheduler.
//!
//! This module provides the [`Subscribe`] trait and built-in implementations
//! for observing lifecycle events emitted by the
//! [`TurnScheduler`](crate::TurnScheduler).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   TurnScheduler ── emit(Event) ──► SubscriberSet ──► each subscriber, in
//!                                        │             subscription order
//!                                   ┌────┴────┬─────────┬───────┐
//!                                   ▼         ▼         ▼       ▼
//!                                LogWriter  Recorder  Custom   ...
//! ```
//!
//! ## Rules
//! - Delivery is **synchronous**: `on_event` runs on the scheduler's stack
//!   before the triggering operation returns.
//! - Delivery is **ordered**: subscribers see each event in subscription
//!   order, and events in emission order.
//! - Subscribers may re-enter the scheduler (e.g. call
//!   `request_next_turn` from a `TurnStarted` handler); the scheduler's
//!   re-entrancy guard defers the nested advance until the current one
//!   finishes.
//!
//! ## Implementing custom subscribers
//! ```rust
//! use turnwheel::{Subscribe, Event, EventKind};
//!
//! struct RoundCounter;
//!
//! impl Subscribe for RoundCounter {
//!     fn on_event(&self, event: &Event) {
//!         if event.kind == EventKind::RoundEnded {
//!             // tally the round
//!         }
//!     }
//! }
//! ```

mod log;
mod set;
mod subscribe;

pub use self::log::LogWriter;
pub use set::SubscriberSet;
pub use subscribe::Subscribe;
