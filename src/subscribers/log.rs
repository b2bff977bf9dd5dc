//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] renders events through the [`log`] facade in a compact
//! human-readable format. This is primarily useful for development, debugging,
//! and the demo programs.
//!
//! ## Output format
//! ```text
//! [round-starting] round=1
//! [turn-started] actor=goblin round=1
//! [turn-ended] actor=goblin round=1
//! [order-changed] actor=orc
//! [round-ended] round=1
//! ```

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Logging subscriber backed by the `log` facade.
///
/// Turn events are logged at `debug` level (one pair per actor per round adds
/// up quickly); round boundaries and order changes at `info`.
///
/// Not intended for production use - implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWriter;

impl Subscribe for LogWriter {
    fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::TurnStarted => {
                if let (Some(actor), Some(round)) = (&e.actor, e.round) {
                    log::debug!("[turn-started] actor={actor} round={round}");
                }
            }
            EventKind::TurnEnded => {
                if let (Some(actor), Some(round)) = (&e.actor, e.round) {
                    log::debug!("[turn-ended] actor={actor} round={round}");
                }
            }
            EventKind::RoundStarting => {
                log::info!("[round-starting] round={:?}", e.round);
            }
            EventKind::RoundEnded => {
                log::info!("[round-ended] round={:?}", e.round);
            }
            EventKind::OrderChanged => {
                log::info!("[order-changed] actor={:?}", e.actor);
            }
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
