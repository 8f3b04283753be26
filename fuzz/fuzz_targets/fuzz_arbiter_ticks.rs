#![no_main]
use arbitrary::Arbitrary;
use cardboard_core::{EventKind, KeyCode, KeyEdge, TickInput, TouchSample, TriggerArbiter};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Tick {
    dt_ms: u8,
    magnitude: f32,
    active: bool,
    moved: bool,
    key: Option<(bool, bool)>,
}

fuzz_target!(|ticks: Vec<Tick>| {
    let Ok(mut a) = TriggerArbiter::builder().try_build() else {
        return;
    };
    let mut now = 0.0f64;
    let mut held = false;
    for t in ticks {
        let dt = f32::from(t.dt_ms) / 1000.0;
        now += f64::from(dt);
        let mut input = TickInput::new(now, dt, t.magnitude)
            .with_touch(TouchSample { active: t.active, moved: t.moved });
        if let Some((down, space)) = t.key {
            let key = if space { KeyCode::space() } else { KeyCode::new("a").unwrap() };
            input = input.with_key(if down { KeyEdge::down(key) } else { KeyEdge::up(key) });
        }
        for k in a.tick(&input).kinds() {
            match k {
                EventKind::Down => { assert!(!held); held = true; }
                EventKind::Up => { assert!(held); held = false; }
                EventKind::Click => assert!(!held),
            }
        }
        assert_eq!(a.is_held(), held);
        let w = a.magnet().window();
        // Trim runs before push, so only the newest sample may overhang the bound.
        let newest = w.last().map_or(0.0, |s| s.dt);
        assert!(w.len() <= 2 || w.total_secs() - newest <= a.magnet().cfg().max_window_secs + 1e-4);
    }
});
