//! Builder for constructing a scheduler with optional subscribers.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::actors::Priority;
use crate::config::SchedulerConfig;
use crate::core::TurnScheduler;
use crate::subscribers::Subscribe;

/// Builder for a [`TurnScheduler`].
///
/// ## Example
/// ```rust
/// use std::rc::Rc;
/// use turnwheel::{LogWriter, SchedulerBuilder, SchedulerConfig};
///
/// let cfg = SchedulerConfig {
///     auto_loop: false,
///     ..SchedulerConfig::default()
/// };
///
/// let sched = SchedulerBuilder::<i32>::new(cfg)
///     .with_subscriber(Rc::new(LogWriter))
///     .build();
/// assert!(sched.is_empty());
/// ```
pub struct SchedulerBuilder<P: Priority> {
    cfg: SchedulerConfig,
    subscribers: Vec<Rc<dyn Subscribe>>,
    _priority: PhantomData<P>,
}

impl<P: Priority> SchedulerBuilder<P> {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: SchedulerConfig) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
            _priority: PhantomData,
        }
    }

    /// Replaces the subscriber list.
    ///
    /// Subscribers receive lifecycle events (turn/round boundaries, order
    /// changes) synchronously, in this order.
    pub fn with_subscribers(mut self, subscribers: Vec<Rc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Appends a single subscriber.
    pub fn with_subscriber(mut self, subscriber: Rc<dyn Subscribe>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Builds and returns the scheduler as a shared handle.
    ///
    /// The handle is an `Rc` so notification handlers can keep a clone and
    /// re-enter the scheduler; more subscribers can be registered later via
    /// [`TurnScheduler::subscribe`].
    pub fn build(self) -> Rc<TurnScheduler<P>> {
        TurnScheduler::assemble(self.cfg, self.subscribers)
    }
}
