//! PLL divisor constants and the clock-switch capability.
//!
//! The board powers up on the internal HSI oscillator and must be switched
//! to a PLL-derived system clock before any clocked peripheral is
//! configured. The switch is acknowledged by two independent hardware
//! flags — the clock-source readback and the PLL lock bit — which can
//! assert in either order, so the sequencer exposes them separately and
//! the bring-up controller polls both.
//!
//! # Clock Tree
//!
//! ```text
//!   HSI (64 MHz) -> /PREDIV (4) -> VCO_IN (16 MHz)
//!                                -> VCO (x48 = 768 MHz)
//!                                  -> /DIVP (2) = 384 MHz  system clock
//! ```
//!
//! # PLL Formula
//!
//!   VCO_INPUT = HSI / PREDIV       (must stay within 1-16 MHz, RM0433 §8.7.14)
//!   VCO       = VCO_INPUT * MUL    (must stay within 192-836 MHz)
//!   SYSCLK    = VCO / DIVP
//!
//! 384 MHz is chosen over the part's 400 MHz maximum because it is an
//! exact 2000 x 192 kHz audio ratio, which keeps downstream sample-clock
//! derivation integral.
//!
//! References:
//! - STM32H7 RM0433 Rev 9, §8.7.14 (PLL configuration, VCO ranges)
//! - STM32H7 RM0433 Rev 9, §8.7.5-8.7.7 (system clock switch, SWS readback)

use thiserror_no_std::Error;

/// HSI oscillator frequency (Hz) — internal 64 MHz RC oscillator.
///
/// Available immediately on power-on; the device always boots on it.
pub const HSI_HZ: u32 = 64_000_000;

/// System clock frequency (Hz) after bring-up completes.
pub const TARGET_CORE_HZ: u32 = 384_000_000;

/// System clock source as reported by the hardware readback field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Internal RC oscillator — the power-on source.
    Hsi,
    /// PLL1 output — the operating source after bring-up.
    Pll1,
}

/// Immutable PLL divisor set.
///
/// Programmed in full before the clock switch is engaged and never changed
/// while a switch is pending. The bring-up controller enforces this by
/// construction: [`ClockSequencer::program_pll`] is its first step and the
/// configuration is never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PllConfig {
    /// Input predivider (DIVM). Valid range 1-63.
    pub prediv: u32,
    /// VCO multiplier (DIVN). Valid range 4-512.
    pub mul: u32,
    /// Output divider (DIVP). Valid range 1-128.
    pub divp: u32,
}

/// Divisors taking the 64 MHz HSI to the 384 MHz system clock.
///
/// 64 / 4 = 16 MHz VCO input, x48 = 768 MHz VCO, / 2 = 384 MHz.
pub const SYS_PLL: PllConfig = PllConfig {
    prediv: 4,
    mul: 48,
    divp: 2,
};

/// A divisor set that violates the hardware's electrical limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PllConfigError {
    /// A divider field is zero or outside its register range.
    #[error("divider field out of register range")]
    DividerOutOfRange,
    /// VCO input frequency outside 1-16 MHz (RM0433 §8.7.14).
    #[error("VCO input {hz} Hz outside 1-16 MHz")]
    VcoInputOutOfRange {
        /// The computed VCO input frequency.
        hz: u32,
    },
    /// VCO output frequency outside 192-836 MHz (RM0433 §8.7.14).
    #[error("VCO output {hz} Hz outside 192-836 MHz")]
    VcoOutputOutOfRange {
        /// The computed VCO output frequency.
        hz: u32,
    },
}

impl PllConfig {
    /// Minimum VCO input frequency (Hz).
    pub const VCO_INPUT_MIN_HZ: u32 = 1_000_000;
    /// Maximum VCO input frequency (Hz).
    pub const VCO_INPUT_MAX_HZ: u32 = 16_000_000;
    /// Minimum VCO output frequency (Hz).
    pub const VCO_MIN_HZ: u32 = 192_000_000;
    /// Maximum VCO output frequency (Hz).
    pub const VCO_MAX_HZ: u32 = 836_000_000;

    /// VCO input frequency for a given oscillator input.
    ///
    /// Only meaningful for configurations that pass [`validate`][Self::validate];
    /// a zero `prediv` divides by zero.
    pub const fn vco_input_hz(&self, input_hz: u32) -> u32 {
        input_hz / self.prediv
    }

    /// VCO output frequency for a given oscillator input.
    pub const fn vco_hz(&self, input_hz: u32) -> u32 {
        self.vco_input_hz(input_hz) * self.mul
    }

    /// System clock frequency this configuration produces.
    pub const fn output_hz(&self, input_hz: u32) -> u32 {
        self.vco_hz(input_hz) / self.divp
    }

    /// Check the divisor set against register ranges and VCO limits.
    #[allow(clippy::cast_possible_truncation)] // reported hz is capped at u32::MAX
    pub fn validate(&self, input_hz: u32) -> Result<(), PllConfigError> {
        if self.prediv == 0
            || self.prediv > 63
            || self.mul < 4
            || self.mul > 512
            || self.divp == 0
            || self.divp > 128
        {
            return Err(PllConfigError::DividerOutOfRange);
        }
        let vco_in = self.vco_input_hz(input_hz);
        if vco_in < Self::VCO_INPUT_MIN_HZ || vco_in > Self::VCO_INPUT_MAX_HZ {
            return Err(PllConfigError::VcoInputOutOfRange { hz: vco_in });
        }
        // mul <= 512 and vco_in <= 16 MHz, so the u64 product is exact and
        // anything above u32::MAX is necessarily out of range.
        let vco = u64::from(vco_in) * u64::from(self.mul);
        if vco < u64::from(Self::VCO_MIN_HZ) || vco > u64::from(Self::VCO_MAX_HZ) {
            return Err(PllConfigError::VcoOutputOutOfRange {
                hz: vco.min(u64::from(u32::MAX)) as u32,
            });
        }
        Ok(())
    }
}

/// Clock-switch capability of the bring-up hardware.
///
/// The arm/confirm write pair that initiates a switch is a protocol, not
/// two independent operations: hardware ignores the sequence if anything
/// intervenes. [`engage_pll_switch`][Self::engage_pll_switch] therefore
/// performs both writes in one call, leaving no seam to interleave through.
///
/// Neither readiness accessor blocks or times out. A flag that never
/// asserts is a fatal hardware fault and the caller's polling loop simply
/// never exits — there is no software path to operate without a stable
/// clock, so a timeout would only dress up an unrecoverable condition.
pub trait ClockSequencer {
    /// Program the PLL divisor set. Must precede the switch.
    fn program_pll(&mut self, cfg: &PllConfig);

    /// Arm and confirm the clock-source switch to PLL1, back-to-back.
    fn engage_pll_switch(&mut self);

    /// Hardware readback of the currently selected system clock source.
    fn selected_source(&self) -> ClockSource;

    /// Whether the PLL has acquired lock.
    fn pll_locked(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sys_pll_is_valid() {
        assert_eq!(SYS_PLL.validate(HSI_HZ), Ok(()));
    }

    #[test]
    fn sys_pll_hits_target_frequency() {
        assert_eq!(SYS_PLL.vco_input_hz(HSI_HZ), 16_000_000);
        assert_eq!(SYS_PLL.vco_hz(HSI_HZ), 768_000_000);
        assert_eq!(SYS_PLL.output_hz(HSI_HZ), TARGET_CORE_HZ);
    }

    #[test]
    fn target_is_audio_ratio() {
        // 384 MHz = 2000 x 192 kHz — keeps sample-clock derivation integral.
        assert_eq!(TARGET_CORE_HZ % 192_000, 0);
    }

    #[test]
    fn zero_prediv_rejected() {
        let cfg = PllConfig {
            prediv: 0,
            mul: 48,
            divp: 2,
        };
        assert_eq!(cfg.validate(HSI_HZ), Err(PllConfigError::DividerOutOfRange));
    }

    #[test]
    fn vco_input_limits_enforced() {
        // 64 / 1 = 64 MHz VCO input — above the 16 MHz ceiling.
        let cfg = PllConfig {
            prediv: 1,
            mul: 10,
            divp: 2,
        };
        assert_eq!(
            cfg.validate(HSI_HZ),
            Err(PllConfigError::VcoInputOutOfRange { hz: 64_000_000 })
        );
    }

    #[test]
    fn vco_output_limits_enforced() {
        // 16 MHz x 8 = 128 MHz VCO — below the 192 MHz floor.
        let cfg = PllConfig {
            prediv: 4,
            mul: 8,
            divp: 2,
        };
        assert_eq!(
            cfg.validate(HSI_HZ),
            Err(PllConfigError::VcoOutputOutOfRange { hz: 128_000_000 })
        );
    }

    proptest::proptest! {
        /// Any configuration validate() accepts stays within the VCO window.
        #[test]
        fn accepted_configs_respect_vco_window(
            prediv in 1u32..=63,
            mul in 4u32..=512,
            divp in 1u32..=128,
        ) {
            let cfg = PllConfig { prediv, mul, divp };
            if cfg.validate(HSI_HZ).is_ok() {
                let vco_in = cfg.vco_input_hz(HSI_HZ);
                assert!((PllConfig::VCO_INPUT_MIN_HZ..=PllConfig::VCO_INPUT_MAX_HZ)
                    .contains(&vco_in));
                let vco = cfg.vco_hz(HSI_HZ);
                assert!((PllConfig::VCO_MIN_HZ..=PllConfig::VCO_MAX_HZ).contains(&vco));
            }
        }

        /// validate() never panics, whatever the divisors.
        #[test]
        fn validate_never_panics(prediv: u32, mul: u32, divp: u32) {
            let cfg = PllConfig { prediv, mul, divp };
            let _ = cfg.validate(HSI_HZ);
        }
    }
}
