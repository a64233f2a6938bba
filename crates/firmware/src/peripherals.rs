//! Init seam for drivers that depend on a brought-up device.
//!
//! The audio codec, the DMA channels, and the periodic timer live in their
//! own crates; the only thing this core exposes to them is "the device is
//! ready". Their constructors take that evidence as a
//! [`DeviceReady`](crate::boot::DeviceReady) reference, so sequencing them
//! before [`bring_up`](crate::boot::bring_up) is a type error, not a
//! runtime surprise.

use crate::boot::DeviceReady;

/// A driver that must not be initialized before bring-up completes.
///
/// Implementors receive the bring-up token at construction. The token
/// cannot be forged or copied, so holding `Self` is itself evidence the
/// driver was initialized in order.
///
/// ```
/// use aria_firmware::peripherals::ClockDependent;
/// use aria_firmware::boot::DeviceReady;
///
/// struct Wm8510Codec { /* register map handle, I2C address, ... */ }
///
/// impl ClockDependent for Wm8510Codec {
///     fn init(_ready: &DeviceReady) -> Self {
///         // Safe to touch the codec: clock locked, pins configured.
///         Wm8510Codec {}
///     }
/// }
/// ```
pub trait ClockDependent: Sized {
    /// Construct the driver. `ready` is evidence that `bring_up` returned.
    fn init(ready: &DeviceReady) -> Self;
}
