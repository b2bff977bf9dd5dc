//! # Cursor-bearing priority order over a slot arena.
//!
//! [`PriorityOrder`] keeps actors in a doubly linked list threaded through a
//! slot arena (`Vec<Option<Node>>` plus a free list), so node indices stay
//! stable across unrelated insertions and removals - the cursor survives any
//! structural edit that does not touch its own node.
//!
//! ## Ordering
//! Descending priority; ties keep insertion order. Insertion walks from the
//! head past every node with priority `>=` the newcomer's and attaches before
//! the first strictly-lower node, so equal-priority actors stay in the order
//! they arrived.
//!
//! ## Deferred removal
//! Removing the actor under the cursor must not delete its node mid-turn:
//! observers may still be reacting to that turn, and the cursor would dangle.
//! Instead the node is *marked* (`doomed`) - immediately invisible to
//! [`current`](PriorityOrder::current), [`contains`](PriorityOrder::contains)
//! and [`snapshot`](PriorityOrder::snapshot) - and physically recycled at the
//! start of the next [`advance`](PriorityOrder::advance). At most one node can
//! be marked, since only the current actor is ever deferred.

use std::rc::Rc;

use crate::actors::{Actor, ActorRef, Priority};
use crate::error::SchedulerError;

struct Node<P: Priority> {
    actor: ActorRef<P>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Mutable turn order: actors sorted by descending priority, with a cursor
/// and a single-slot deferred-removal mark.
pub struct PriorityOrder<P: Priority> {
    nodes: Vec<Option<Node<P>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    /// Node whose turn it currently is; `None` between rounds.
    cursor: Option<usize>,
    /// Node marked for deferred removal; always the cursor node when set.
    doomed: Option<usize>,
}

impl<P: Priority> Default for PriorityOrder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Priority> PriorityOrder<P> {
    /// Creates an empty order.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            cursor: None,
            doomed: None,
        }
    }

    /// Number of actors in the order, masked node excluded.
    pub fn len(&self) -> usize {
        self.physical_len() - usize::from(self.doomed.is_some())
    }

    /// `true` when no actors are logically present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes physically allocated, masked node included.
    pub(crate) fn physical_len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// The actor whose turn it currently is.
    ///
    /// `None` when no round is underway, and also while the cursor node is
    /// masked by a pending removal.
    pub fn current(&self) -> Option<ActorRef<P>> {
        let slot = self.cursor?;
        if self.doomed == Some(slot) {
            return None;
        }
        Some(Rc::clone(&self.node(slot).actor))
    }

    /// Inserts the actor at the position its priority dictates.
    ///
    /// Re-inserting the actor whose removal is pending cancels the pending
    /// removal and repositions it by its current priority; it stays the
    /// cursor node. Any other already-present actor is rejected with
    /// [`SchedulerError::AlreadyPresent`].
    pub fn insert(&mut self, actor: ActorRef<P>) -> Result<(), SchedulerError> {
        if let Some(doomed) = self.doomed {
            if Rc::ptr_eq(&self.node(doomed).actor, &actor) {
                self.doomed = None;
                self.detach(doomed);
                let before = self.position_before(actor.priority());
                self.attach_before(doomed, before);
                return Ok(());
            }
        }

        if self.find(&actor).is_some() {
            return Err(SchedulerError::AlreadyPresent {
                name: actor.name().to_string(),
            });
        }

        let before = self.position_before(actor.priority());
        let slot = self.alloc(actor);
        self.attach_before(slot, before);
        Ok(())
    }

    /// Removes the actor from the order.
    ///
    /// Returns `false` when the actor is not (logically) present. Removing the
    /// current actor marks it for deferred removal instead of deleting its
    /// node; the node is recycled on the next [`advance`](PriorityOrder::advance).
    pub fn remove(&mut self, actor: &ActorRef<P>) -> bool {
        if self.masked(actor) {
            return false;
        }
        let Some(slot) = self.find(actor) else {
            return false;
        };
        if self.cursor == Some(slot) {
            self.doomed = Some(slot);
        } else {
            self.detach(slot);
            self.release(slot);
        }
        true
    }

    /// Repositions the actor after a priority change.
    ///
    /// The node is detached and re-attached at the slot its new priority
    /// dictates; the cursor follows the node, so repositioning the current
    /// actor does not end its turn.
    pub fn update_priority(&mut self, actor: &ActorRef<P>) -> Result<(), SchedulerError> {
        if self.masked(actor) {
            return Err(SchedulerError::RemovalPending {
                name: actor.name().to_string(),
            });
        }
        let Some(slot) = self.find(actor) else {
            return Err(SchedulerError::NotFound {
                name: actor.name().to_string(),
            });
        };
        self.detach(slot);
        let before = self.position_before(actor.priority());
        self.attach_before(slot, before);
        Ok(())
    }

    /// Moves the cursor to the next node, recycling a marked node on the way.
    ///
    /// Steps: remember the pre-advance node, move the cursor (to the head when
    /// it was unset), physically delete the remembered node if it was marked,
    /// and report the new current actor. `None` means the cursor ran off the
    /// end: the round is complete and the next advance starts from the top.
    pub fn advance(&mut self) -> Result<Option<ActorRef<P>>, SchedulerError> {
        if self.physical_len() == 0 {
            return Err(SchedulerError::EmptyOrder);
        }

        let departed = self.cursor;
        self.cursor = match departed {
            None => self.head,
            Some(slot) => self.node(slot).next,
        };

        if let Some(doomed) = self.doomed.take() {
            debug_assert_eq!(Some(doomed), departed, "only the cursor node is ever marked");
            self.detach(doomed);
            self.release(doomed);
        }

        Ok(self.current())
    }

    /// Clears the cursor so the next advance starts a fresh round.
    ///
    /// A pending removal is finalized first; leaving the mark behind would let
    /// a later advance recycle a node the fresh cursor may have just reached.
    pub fn reset(&mut self) {
        if let Some(doomed) = self.doomed.take() {
            self.detach(doomed);
            self.release(doomed);
        }
        self.cursor = None;
    }

    /// `true` iff the actor is present and not masked by a pending removal.
    pub fn contains(&self, actor: &ActorRef<P>) -> bool {
        !self.masked(actor) && self.find(actor).is_some()
    }

    /// The order as it stands, front (acts first) to back, masked excluded.
    pub fn snapshot(&self) -> Vec<ActorRef<P>> {
        let mut out = Vec::with_capacity(self.len());
        let mut walker = self.head;
        while let Some(slot) = walker {
            if self.doomed != Some(slot) {
                out.push(Rc::clone(&self.node(slot).actor));
            }
            walker = self.node(slot).next;
        }
        out
    }

    fn node(&self, slot: usize) -> &Node<P> {
        self.nodes[slot].as_ref().expect("live arena slot")
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node<P> {
        self.nodes[slot].as_mut().expect("live arena slot")
    }

    fn masked(&self, actor: &ActorRef<P>) -> bool {
        self.doomed
            .is_some_and(|slot| Rc::ptr_eq(&self.node(slot).actor, actor))
    }

    fn find(&self, actor: &ActorRef<P>) -> Option<usize> {
        let mut walker = self.head;
        while let Some(slot) = walker {
            if Rc::ptr_eq(&self.node(slot).actor, actor) {
                return Some(slot);
            }
            walker = self.node(slot).next;
        }
        None
    }

    /// First node with priority strictly below `priority`, scanning from the
    /// high end. `None` means attach at the tail.
    fn position_before(&self, priority: P) -> Option<usize> {
        let mut walker = self.head;
        while let Some(slot) = walker {
            if self.node(slot).actor.priority() < priority {
                return Some(slot);
            }
            walker = self.node(slot).next;
        }
        None
    }

    fn alloc(&mut self, actor: ActorRef<P>) -> usize {
        let node = Node {
            actor,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) {
        self.nodes[slot] = None;
        self.free.push(slot);
    }

    /// Unlinks the node from the chain without releasing its slot.
    fn detach(&mut self, slot: usize) {
        let (prev, next) = {
            let node = self.node_mut(slot);
            (node.prev.take(), node.next.take())
        };
        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.tail = prev,
        }
    }

    /// Links a detached node in front of `before`, or at the tail for `None`.
    fn attach_before(&mut self, slot: usize, before: Option<usize>) {
        match before {
            Some(b) => {
                let prev = self.node(b).prev;
                self.node_mut(slot).prev = prev;
                self.node_mut(slot).next = Some(b);
                self.node_mut(b).prev = Some(slot);
                match prev {
                    Some(p) => self.node_mut(p).next = Some(slot),
                    None => self.head = Some(slot),
                }
            }
            None => {
                let prev = self.tail;
                self.node_mut(slot).prev = prev;
                self.node_mut(slot).next = None;
                match prev {
                    Some(p) => self.node_mut(p).next = Some(slot),
                    None => self.head = Some(slot),
                }
                self.tail = Some(slot);
            }
        }
    }
}
