//! # Closure-backed actor (`ActorFn`)
//!
//! [`ActorFn`] is a ready-made [`Actor`] for hosts that don't want a dedicated
//! type per participant: a name, an interior-mutable priority, and optional
//! boxed hooks attached with consuming builder methods.
//!
//! ## Example
//! ```rust
//! use turnwheel::{Actor, ActorFn};
//!
//! let goblin = ActorFn::new("goblin", 3)
//!     .on_turn_start(|| println!("goblin acts"))
//!     .rc();
//!
//! assert_eq!(goblin.name(), "goblin");
//! assert_eq!(goblin.priority(), 3);
//! ```

use std::borrow::Cow;
use std::cell::Cell;
use std::rc::Rc;

use crate::actors::{Actor, ActorRef, Priority};

/// Closure-backed actor implementation.
///
/// Priority lives in a `Cell` so the host can change it on a shared handle;
/// note that [`set_priority`](ActorFn::set_priority) only records the value -
/// the order is repositioned when the host calls
/// [`update_priority`](crate::TurnScheduler::update_priority).
pub struct ActorFn<P: Priority> {
    name: Cow<'static, str>,
    priority: Cell<P>,
    start: Option<Box<dyn Fn()>>,
    end: Option<Box<dyn Fn()>>,
}

impl<P: Priority> ActorFn<P> {
    /// Creates a new actor with the given name and priority and no hooks.
    pub fn new(name: impl Into<Cow<'static, str>>, priority: P) -> Self {
        Self {
            name: name.into(),
            priority: Cell::new(priority),
            start: None,
            end: None,
        }
    }

    /// Attaches a turn-start hook.
    pub fn on_turn_start(mut self, f: impl Fn() + 'static) -> Self {
        self.start = Some(Box::new(f));
        self
    }

    /// Attaches a turn-end hook.
    pub fn on_turn_end(mut self, f: impl Fn() + 'static) -> Self {
        self.end = Some(Box::new(f));
        self
    }

    /// Finishes construction, returning a shared handle (`Rc<dyn Actor<P>>`).
    ///
    /// ## Example
    /// ```rust
    /// use turnwheel::{Actor, ActorFn, ActorRef};
    ///
    /// let orc: ActorRef<i32> = ActorFn::new("orc", 2).rc();
    /// assert_eq!(orc.priority(), 2);
    /// ```
    pub fn rc(self) -> ActorRef<P> {
        Rc::new(self)
    }

    /// Records a new priority value.
    ///
    /// Follow up with [`TurnScheduler::update_priority`](crate::TurnScheduler::update_priority)
    /// to reposition the actor; until then the order keeps its old slot.
    pub fn set_priority(&self, priority: P) {
        self.priority.set(priority);
    }
}

impl<P: Priority> Actor<P> for ActorFn<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> P {
        self.priority.get()
    }

    fn on_turn_start(&self) {
        if let Some(f) = &self.start {
            f();
        }
    }

    fn on_turn_end(&self) {
        if let Some(f) = &self.end {
            f();
        }
    }
}
