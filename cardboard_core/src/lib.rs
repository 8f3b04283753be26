#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Cardboard viewer trigger logic (device-agnostic).
//!
//! Turns a noisy magnetometer stream plus touch and key edges into clean
//! Down / Up / Click events. Nothing here polls hardware or reads a clock:
//! the host builds a `TickInput` per frame and calls `TriggerArbiter::tick`.
//!
//! ## Architecture
//!
//! - **Window**: duration-bounded sample buffer (`window` module)
//! - **Magnet**: two-half ratio classifier with a stability latch (`magnet`)
//! - **Touch / Key**: edge adapters for the other two sources
//! - **Trigger**: the Up/Down arbiter, click timing, haptics, observers
//! - **Status**: multi-line diagnostic dump
//!
//! ## Example
//!
//! ```
//! use cardboard_core::{TickInput, TouchSample, TriggerArbiter};
//!
//! let mut trigger = TriggerArbiter::builder().try_build().unwrap();
//! trigger.on_click(|e| println!("click at {:.2}s", e.at()));
//!
//! trigger.tick(&TickInput::new(0.016, 0.016, 300.0).with_touch(TouchSample::moving()));
//! let report = trigger.tick(&TickInput::new(0.032, 0.016, 300.0));
//! assert_eq!(report.events.len(), 2); // up + click
//! ```

pub mod builder;
pub mod config;
pub mod conversions;
pub mod error;
pub mod input;
pub mod key;
pub mod magnet;
pub mod mocks;
pub mod observer;
pub mod sim;
pub mod status;
pub mod ticker;
pub mod touch;
pub mod trigger;
pub mod window;

pub use builder::TriggerArbiterBuilder;
pub use config::{MagnetCfg, TriggerCfg};
pub use error::{BuildError, Result, TriggerError};
pub use input::{KeyCode, KeyDirection, KeyEdge, TickInput, TouchSample};
pub use key::KeyClassifier;
pub use magnet::{MagnetClassifier, MagnetState, Verdict, WindowState};
pub use observer::{EventKind, ObserverId, TriggerEvent};
pub use status::StatusReport;
pub use ticker::FrameTicker;
pub use touch::TouchClassifier;
pub use trigger::{TickReport, TriggerArbiter, TriggerState};
pub use window::{Sample, SlidingWindow, Timed};
