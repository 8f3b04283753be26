//! Ordered observer lists, one per event kind.

use std::fmt;

/// Event emitted by the arbiter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerEvent {
    /// Trigger went down at `at` (host seconds).
    Down { at: f64 },
    /// Trigger went up at `at` after being held `held_secs`.
    Up { at: f64, held_secs: f64 },
    /// The down/up pair ending at `at` was short enough to be a click.
    Click { at: f64, held_secs: f64 },
}

impl TriggerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            TriggerEvent::Down { .. } => EventKind::Down,
            TriggerEvent::Up { .. } => EventKind::Up,
            TriggerEvent::Click { .. } => EventKind::Click,
        }
    }

    pub fn at(&self) -> f64 {
        match *self {
            TriggerEvent::Down { at }
            | TriggerEvent::Up { at, .. }
            | TriggerEvent::Click { at, .. } => at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Down,
    Up,
    Click,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Down => "down",
            EventKind::Up => "up",
            EventKind::Click => "click",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle returned on registration; pass it back to remove the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback = Box<dyn FnMut(&TriggerEvent)>;

#[derive(Default)]
pub struct Observers {
    next_id: u64,
    down: Vec<(ObserverId, Callback)>,
    up: Vec<(ObserverId, Callback)>,
    click: Vec<(ObserverId, Callback)>,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("down", &self.down.len())
            .field("up", &self.up.len())
            .field("click", &self.click.len())
            .finish()
    }
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, kind: EventKind, f: F) -> ObserverId
    where
        F: FnMut(&TriggerEvent) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.list_mut(kind).push((id, Box::new(f)));
        id
    }

    /// Remove an observer; returns false when the handle is unknown.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        for kind in [EventKind::Down, EventKind::Up, EventKind::Click] {
            let list = self.list_mut(kind);
            if let Some(pos) = list.iter().position(|(i, _)| *i == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::Down => self.down.len(),
            EventKind::Up => self.up.len(),
            EventKind::Click => self.click.len(),
        }
    }

    /// Call every observer of the event's kind in registration order.
    pub fn dispatch(&mut self, event: &TriggerEvent) {
        for (_, f) in self.list_mut(event.kind()).iter_mut() {
            f(event);
        }
    }

    fn list_mut(&mut self, kind: EventKind) -> &mut Vec<(ObserverId, Callback)> {
        match kind {
            EventKind::Down => &mut self.down,
            EventKind::Up => &mut self.up,
            EventKind::Click => &mut self.click,
        }
    }
}
