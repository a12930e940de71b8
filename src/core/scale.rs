use crate::core::RawReading;
use serde::{Deserialize, Serialize};

/// Reference voltage of the converter's full-scale range, in volts.
pub const DEFAULT_VREF: f64 = 3.3;

/// Highest code the converter reports, corresponding to `DEFAULT_VREF`.
pub const DEFAULT_RESOLUTION: u32 = 65535;

/// Linear transfer function of an ADC channel: maps a raw integer code onto
/// the `0..=vref` voltage range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    vref: f64,
    resolution: u32,
}

impl Scale {
    /// Panics if `resolution` is zero, as every conversion divides by it.
    /// A non-positive `vref` is physically meaningless but tolerated.
    pub const fn new(vref: f64, resolution: u32) -> Scale {
        if resolution == 0 {
            panic!("ADC resolution must be non-zero.");
        }

        Scale { vref, resolution }
    }

    pub fn to_volts(&self, reading: RawReading) -> f64 {
        *reading as f64 * self.vref / self.resolution as f64
    }
}

impl Default for Scale {
    fn default() -> Scale {
        Scale::new(DEFAULT_VREF, DEFAULT_RESOLUTION)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn full_range_endpoints() {
        let scale = Scale::default();

        assert_eq!(scale.to_volts(RawReading(0)), 0.0);
        assert!((scale.to_volts(RawReading(65535)) - 3.3).abs() < EPSILON);
    }

    #[test]
    fn midpoint_is_half_vref() {
        let scale = Scale::default();
        let midpoint = scale.to_volts(RawReading(32767));

        // 32767/65535 sits one code below the exact midpoint.
        assert!((midpoint - 1.65).abs() < 1e-4);
        assert!((midpoint - 32767.0 * 3.3 / 65535.0).abs() < EPSILON);
    }

    #[test]
    fn proportional_over_range() {
        let scale = Scale::new(5.0, 1023);

        for raw in [1, 17, 511, 1000, 1023] {
            let expected = raw as f64 * 5.0 / 1023.0;
            assert!((scale.to_volts(RawReading(raw)) - expected).abs() < EPSILON);
        }
    }
}
