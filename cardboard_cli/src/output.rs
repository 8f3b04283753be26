//! Event and summary printing (text or JSON lines on stdout).

use cardboard_core::{EventKind, TriggerEvent};
use serde_json::json;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub ticks: u64,
    pub down: u32,
    pub up: u32,
    pub click: u32,
}

impl Summary {
    pub fn record(&mut self, e: &TriggerEvent) {
        match e.kind() {
            EventKind::Down => self.down += 1,
            EventKind::Up => self.up += 1,
            EventKind::Click => self.click += 1,
        }
    }
}

pub fn event_json(e: &TriggerEvent) -> serde_json::Value {
    match *e {
        TriggerEvent::Down { at } => json!({ "event": "down", "at": at }),
        TriggerEvent::Up { at, held_secs } | TriggerEvent::Click { at, held_secs } => {
            json!({ "event": e.kind().as_str(), "at": at, "held_secs": held_secs })
        }
    }
}

pub fn event_text(e: &TriggerEvent) -> String {
    match *e {
        TriggerEvent::Down { at } => format!("{:<6} t={at:.3}s", "down"),
        TriggerEvent::Up { at, held_secs } | TriggerEvent::Click { at, held_secs } => {
            format!("{:<6} t={at:.3}s held={held_secs:.3}s", e.kind().as_str())
        }
    }
}

pub fn print_event(e: &TriggerEvent, json: bool) {
    if json {
        println!("{}", event_json(e));
    } else {
        println!("{}", event_text(e));
    }
}

pub fn print_summary(s: &Summary, json: bool) {
    if json {
        println!(
            "{}",
            json!({
                "summary": {
                    "ticks": s.ticks,
                    "down": s.down,
                    "up": s.up,
                    "click": s.click,
                }
            })
        );
    } else {
        println!(
            "{} ticks: {} down, {} up, {} click",
            s.ticks, s.down, s.up, s.click
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_json_carries_hold_time() {
        let v = event_json(&TriggerEvent::Click {
            at: 1.5,
            held_secs: 0.25,
        });
        assert_eq!(v["event"], "click");
        assert_eq!(v["at"], 1.5);
        assert_eq!(v["held_secs"], 0.25);
    }

    #[test]
    fn down_text_has_no_hold_time() {
        let s = event_text(&TriggerEvent::Down { at: 0.5 });
        assert_eq!(s, "down   t=0.500s");
    }

    #[test]
    fn summary_counts_by_kind() {
        let mut s = Summary::default();
        s.record(&TriggerEvent::Down { at: 0.0 });
        s.record(&TriggerEvent::Up {
            at: 0.1,
            held_secs: 0.1,
        });
        s.record(&TriggerEvent::Click {
            at: 0.1,
            held_secs: 0.1,
        });
        assert_eq!((s.down, s.up, s.click), (1, 1, 1));
    }
}
