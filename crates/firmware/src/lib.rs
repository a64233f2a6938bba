//! Aria audio starter board firmware.
//!
//! The one job of this crate is taking the board from power-on reset to an
//! operating state — clock locked, pins configured, regulator stabilized —
//! and handing the caller the [`boot::DeviceReady`] evidence that it
//! happened. Everything that runs afterwards (codec, DMA, periodic timer)
//! lives in other crates and must present that evidence at init.
//!
//! # Architecture
//!
//! ```text
//! Entry point (main.rs, hardware feature)
//!         ↓
//! Bring-up controller (boot module, host-testable)
//!         ↓
//! Platform HAL traits (aria-platform)
//!         ↓
//! Hardware backend (hal::stm32, hardware feature)
//! ```
//!
//! # Features
//!
//! - `hardware` - Build for the STM32H743 target (embassy, defmt, cortex-m)
//!
//! Host builds (`cargo test -p aria-firmware`) exercise the full bring-up
//! sequence against `aria_platform::mocks::MockHal`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod boot;
pub mod hal;
pub mod peripherals;

pub use boot::{bring_up, DeviceReady, BRING_UP_STEPS, REGULATOR_SETTLE_ITERATIONS};
pub use peripherals::ClockDependent;
