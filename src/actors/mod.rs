//! # Turn-taking participants.
//!
//! This module defines the [`Actor`] trait (priority + turn hooks) and a
//! convenient closure-backed implementation [`ActorFn`]. The common handle
//! type is [`ActorRef`], an `Rc<dyn Actor<P>>` suitable for sharing between
//! the scheduler and the hosting layer.
//!
//! Actors are owned by the hosting layer: the scheduler holds shared handles
//! and relies on the host to call `remove` when a participant leaves.
//! Identity is handle identity (`Rc::ptr_eq`), so the same actor inserted
//! through two clones of one `Rc` is the same participant, and two separately
//! allocated actors are distinct even if their names match.

mod actor;
mod actor_fn;

pub use actor::{Actor, ActorRef, Priority};
pub use actor_fn::ActorFn;
