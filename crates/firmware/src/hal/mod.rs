//! Hardware backends for the platform capability traits.
//!
//! Host builds carry no backend — tests drive the bring-up controller
//! against `aria_platform::mocks::MockHal` instead.

#[cfg(feature = "hardware")]
pub mod stm32;

#[cfg(feature = "hardware")]
pub use stm32::Stm32Hal;
