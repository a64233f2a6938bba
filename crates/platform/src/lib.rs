//! Hardware abstraction layer for the Aria audio starter board.
//!
//! This crate defines the trait-based capabilities the bring-up sequence
//! needs from the hardware, so the sequence itself can be exercised on a
//! development host without a board attached.
//!
//! # Architecture Layers
//!
//! ```text
//! Bring-up controller (aria-firmware crate)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Hardware Layer (embassy-stm32 GPIO + RCC registers)
//! ```
//!
//! # Capabilities
//!
//! - [`ClockSequencer`] - PLL programming, the atomic clock-source switch,
//!   and the two hardware readiness flags
//! - [`BoardIo`] - direction and level control for the board's role-named
//!   pins (LEDs, switches, volume interface, regulator enable)
//! - [`SpinDelay`] - busy-wait with a fixed iteration count
//! - [`BringUpHal`] - the union of the three, consumed by `bring_up()`
//!
//! # Features
//!
//! - `std`: expose the mock HAL to downstream host tests
//! - `defmt`: enable defmt logging derives (hardware builds only)

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod board;
pub mod clock;
pub mod debounce;
pub mod gpio;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export the capability traits and the types that cross them
pub use board::{BoardIo, BoardPin, BringUpHal, Led, SpinDelay, Switch};
pub use clock::{ClockSequencer, ClockSource, PllConfig, PllConfigError};
pub use debounce::DebounceCounters;
pub use gpio::{Direction, PinState};
