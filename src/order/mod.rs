//! # Priority-sorted turn order.
//!
//! This module contains [`PriorityOrder`], the mutable sequence the scheduler
//! cycles through: actors sorted by descending priority, a movable cursor
//! designating whose turn it is, and a single-slot deferred-removal mark that
//! lets the current actor be removed mid-turn without corrupting the cursor.
//!
//! The structure is purely structural: it never invokes actor hooks or emits
//! events. The [`TurnScheduler`](crate::TurnScheduler) drives it and fires all
//! notifications, so no internal borrow is ever held across user code.

mod order;

pub use order::PriorityOrder;
