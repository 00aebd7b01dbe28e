//! Bit-exact IEEE-754 binary32 encoding
//!
//! The testbench compares hardware outputs against 32-bit bitpatterns, so
//! the conversion here must be exact: 1 sign bit, 8 exponent bits, 23
//! mantissa bits, round-to-nearest-even on narrowing. Zeros, infinities,
//! subnormals and NaN all go through the standard bit layout.
//!
//! NaN payloads are canonicalized: any NaN input encodes to
//! [`CANONICAL_NAN_BITS`] (quiet NaN, sign clear). Hosts differ in which
//! payload their float operations produce; a single canonical pattern keeps
//! generated suites stable across platforms.

use crate::error::{VecForgeError, VecResult};

/// Canonical quiet NaN: sign 0, exponent all ones, top mantissa bit set.
pub const CANONICAL_NAN_BITS: u32 = 0x7FC0_0000;

/// Positive infinity bitpattern: exponent all ones, mantissa zero.
pub const POS_INFINITY_BITS: u32 = 0x7F80_0000;

/// Negative infinity bitpattern: sign set, exponent all ones, mantissa zero.
pub const NEG_INFINITY_BITS: u32 = 0xFF80_0000;

/// Encode a value as its IEEE-754 binary32 bitpattern.
///
/// The narrowing to f32 uses round-to-nearest-even. NaN inputs map to the
/// canonical quiet NaN. A *finite* input whose magnitude overflows the
/// binary32 range is an [`VecForgeError::EncodingDomain`] error; infinite
/// inputs encode to the infinity patterns as usual.
pub fn encode(value: f64) -> VecResult<u32> {
    if value.is_nan() {
        return Ok(CANONICAL_NAN_BITS);
    }
    let narrowed = value as f32;
    if narrowed.is_infinite() && value.is_finite() {
        return Err(VecForgeError::EncodingDomain { value });
    }
    Ok(narrowed.to_bits())
}

/// Decode a binary32 bitpattern back to a value.
///
/// Exact: every binary32 value, including subnormals and signed zeros, is
/// representable in f64, so no rounding occurs on the widening.
pub fn decode(bits: u32) -> f64 {
    f64::from(f32::from_bits(bits))
}

/// Render a bitpattern as 8 uppercase hex digits (fixed 32-bit field).
pub fn hex(bits: u32) -> String {
    format!("{:08X}", bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_encodings() {
        assert_eq!(encode(2.0).unwrap(), 0x4000_0000);
        assert_eq!(encode(3.0).unwrap(), 0x4040_0000);
        assert_eq!(encode(6.0).unwrap(), 0x40C0_0000);
        assert_eq!(encode(1.5).unwrap(), 0x3FC0_0000);
        assert_eq!(encode(-2.0).unwrap(), 0xC000_0000);
    }

    #[test]
    fn test_signed_zeros_differ_only_in_sign_bit() {
        let pos = encode(0.0).unwrap();
        let neg = encode(-0.0).unwrap();
        assert_eq!(pos, 0x0000_0000);
        assert_eq!(neg, 0x8000_0000);
        assert_eq!(pos ^ neg, 1 << 31);
        assert!(decode(neg).is_sign_negative());
    }

    #[test]
    fn test_infinities() {
        assert_eq!(encode(f64::INFINITY).unwrap(), POS_INFINITY_BITS);
        assert_eq!(encode(f64::NEG_INFINITY).unwrap(), NEG_INFINITY_BITS);
        assert_eq!(decode(POS_INFINITY_BITS), f64::INFINITY);
        assert_eq!(decode(NEG_INFINITY_BITS), f64::NEG_INFINITY);
    }

    #[test]
    fn test_nan_canonicalization() {
        assert_eq!(encode(f64::NAN).unwrap(), CANONICAL_NAN_BITS);
        assert_eq!(encode(-f64::NAN).unwrap(), CANONICAL_NAN_BITS);
        assert!(decode(CANONICAL_NAN_BITS).is_nan());
        // Any exponent-all-ones, mantissa-nonzero pattern decodes to NaN.
        assert!(decode(0x7F80_0001).is_nan());
        assert!(decode(0xFFC0_1234).is_nan());
        // Its re-encoding is the canonical pattern, not the original payload.
        assert_eq!(encode(decode(0xFFC0_1234)).unwrap(), CANONICAL_NAN_BITS);
    }

    #[test]
    fn test_subnormals() {
        // Smallest positive subnormal.
        assert_eq!(decode(0x0000_0001), f64::from(f32::from_bits(1)));
        assert_eq!(encode(decode(0x0000_0001)).unwrap(), 0x0000_0001);
        // Largest subnormal.
        assert_eq!(encode(decode(0x007F_FFFF)).unwrap(), 0x007F_FFFF);
        // Negative subnormal.
        assert_eq!(encode(decode(0x8000_0001)).unwrap(), 0x8000_0001);
    }

    #[test]
    fn test_finite_overflow_is_an_error() {
        let err = encode(1e300).unwrap_err();
        assert!(matches!(err, VecForgeError::EncodingDomain { .. }));
        let err = encode(-1e39).unwrap_err();
        assert!(matches!(
            err,
            VecForgeError::EncodingDomain { value } if value == -1e39
        ));
        // f32::MAX itself is fine.
        assert_eq!(encode(f64::from(f32::MAX)).unwrap(), f32::MAX.to_bits());
    }

    #[test]
    fn test_round_to_nearest_even_on_narrowing() {
        // 16777217 = 2^24 + 1 is not representable in binary32; ties to 2^24.
        assert_eq!(encode(16_777_217.0).unwrap(), encode(16_777_216.0).unwrap());
        // 16777219 rounds up to 16777220 (nearest, even mantissa).
        assert_eq!(encode(16_777_219.0).unwrap(), encode(16_777_220.0).unwrap());
    }

    #[test]
    fn test_hex_rendering() {
        assert_eq!(hex(0x4000_0000), "40000000");
        assert_eq!(hex(0x40C0_0000), "40C00000");
        assert_eq!(hex(0x0000_0001), "00000001");
        assert_eq!(hex(NEG_INFINITY_BITS), "FF800000");
    }

    proptest! {
        // encode(decode(x)) == x for every non-NaN bitpattern.
        #[test]
        fn prop_bitpattern_round_trip(bits in any::<u32>()) {
            let value = decode(bits);
            if value.is_nan() {
                prop_assert_eq!(encode(value).unwrap(), CANONICAL_NAN_BITS);
            } else {
                prop_assert_eq!(encode(value).unwrap(), bits);
            }
        }

        // decode(encode(x)) == x for values already exact in binary32.
        #[test]
        fn prop_value_round_trip(value in -1.0e30f32..1.0e30f32) {
            let widened = f64::from(value);
            let bits = encode(widened).unwrap();
            prop_assert_eq!(decode(bits), widened);
        }
    }
}
