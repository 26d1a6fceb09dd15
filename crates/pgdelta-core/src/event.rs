//! Control events and the bounded queue that carries them to the main loop.
//!
//! Producers (terminal input reader, resize notifications) each hold an
//! [`EventSender`]; the main loop owns the [`EventQueue`]. The queue has a
//! fixed capacity and a full queue blocks the producer until the loop
//! catches up.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TrySendError};
use std::time::Duration;

/// Maximum number of queued events.
pub const EVENT_QUEUE_CAPACITY: usize = 100;

/// Closed set of control events consumed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Finished,
    ViewNext,
    ViewPrev,
    DecreasePollTime,
    IncreasePollTime,
    Help,
    ToggleWantRelative,
    ResetStatistics,
    ResizeScreen { width: u16, height: u16 },
    /// Input with no binding. Ignored by the loop.
    Unknown,
    /// Input source failure, shown on the status line.
    Error(String),
    /// Nothing happened.
    None,
}

/// What woke the main loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Wakeup {
    /// The wait elapsed without an event: time to collect.
    Tick,
    Event(Event),
}

/// Producer handle. Cheap to clone, one per producer.
#[derive(Clone)]
pub struct EventSender {
    tx: SyncSender<Event>,
}

impl EventSender {
    /// Queues `event`, blocking while the queue is full.
    ///
    /// Returns `false` once the consumer is gone, telling the producer to
    /// stop.
    pub fn send(&self, event: Event) -> bool {
        if event == Event::None {
            return true;
        }
        self.tx.send(event).is_ok()
    }

    /// Queues `event` without blocking; `false` if full or disconnected.
    pub fn try_send(&self, event: Event) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Consumer side of the event queue.
pub struct EventQueue {
    rx: Receiver<Event>,
    tx: SyncSender<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::with_capacity(EVENT_QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, rx) = mpsc::sync_channel(capacity);
        Self { rx, tx }
    }

    /// New producer handle.
    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Waits up to `timeout` for the next event.
    ///
    /// A zero timeout still drains an event that is already queued.
    pub fn next_timeout(&self, timeout: Duration) -> Wakeup {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Wakeup::Event(event),
            Err(RecvTimeoutError::Timeout) => Wakeup::Tick,
            // The queue keeps its own sender, so this cannot happen while
            // `self` is alive.
            Err(RecvTimeoutError::Disconnected) => Wakeup::Event(Event::Finished),
        }
    }

    /// Next already-queued event, if any.
    pub fn try_next(&self) -> Option<Event> {
        self.rx.try_recv().ok()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
