//! Lexicographically sortable scalar encodings
//!
//! Fixed-width big-endian keys whose byte-wise order equals the numeric
//! order of the source value, so scalar properties support range scans
//! directly over the bucket key space.

use crate::error::{CuttleError, Result};

const SIGN_BIT: u64 = 1 << 63;

/// Encode an i64 so that byte-lexicographic order of the encodings
/// matches numeric order. Flips the sign bit, then writes big-endian.
pub fn encode_int64(value: i64) -> [u8; 8] {
    ((value as u64) ^ SIGN_BIT).to_be_bytes()
}

/// Inverse of [`encode_int64`]
pub fn decode_int64(data: [u8; 8]) -> i64 {
    (u64::from_be_bytes(data) ^ SIGN_BIT) as i64
}

/// Encode a u32 as its big-endian bytes
pub fn encode_uint32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Inverse of [`encode_uint32`]
pub fn decode_uint32(data: [u8; 4]) -> u32 {
    u32::from_be_bytes(data)
}

/// Encode an f64 so that byte-lexicographic order of the encodings
/// matches numeric order for all non-NaN values. Negative values have
/// every bit inverted, all others only the sign bit.
///
/// NaN has no place in a total order and is rejected.
pub fn encode_float64(value: f64) -> Result<[u8; 8]> {
    if value.is_nan() {
        return Err(CuttleError::Encode(
            "NaN has no sortable encoding".to_string(),
        ));
    }

    let bits = value.to_bits();
    let mapped = if bits & SIGN_BIT != 0 {
        !bits
    } else {
        bits ^ SIGN_BIT
    };
    Ok(mapped.to_be_bytes())
}

/// Inverse of [`encode_float64`]
pub fn decode_float64(data: [u8; 8]) -> f64 {
    let mapped = u64::from_be_bytes(data);
    let bits = if mapped & SIGN_BIT != 0 {
        mapped ^ SIGN_BIT
    } else {
        !mapped
    };
    f64::from_bits(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int64_known_encodings() {
        assert_eq!(
            encode_int64(-1),
            [0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
        assert_eq!(encode_int64(0), [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(encode_int64(1), [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_int64_order() {
        let samples: Vec<i64> = vec![
            i64::MIN,
            i64::MIN + 1,
            -1_000_000,
            -255,
            -1,
            0,
            1,
            42,
            1_000_000,
            i64::MAX - 1,
            i64::MAX,
        ];

        for pair in samples.windows(2) {
            assert!(
                encode_int64(pair[0]) < encode_int64(pair[1]),
                "expected encode({}) < encode({})",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_int64_roundtrip() {
        for value in [i64::MIN, -77, 0, 13, i64::MAX] {
            assert_eq!(decode_int64(encode_int64(value)), value);
        }
    }

    #[test]
    fn test_uint32_order_and_roundtrip() {
        let samples: Vec<u32> = vec![0, 1, 255, 256, 70_000, u32::MAX];
        for pair in samples.windows(2) {
            assert!(encode_uint32(pair[0]) < encode_uint32(pair[1]));
        }
        for value in samples {
            assert_eq!(decode_uint32(encode_uint32(value)), value);
        }
    }

    #[test]
    fn test_float64_order() {
        let samples: Vec<f64> = vec![
            f64::NEG_INFINITY,
            f64::MIN,
            -1e300,
            -1.5,
            -f64::MIN_POSITIVE,
            0.0,
            f64::MIN_POSITIVE,
            0.25,
            1.0,
            1e300,
            f64::MAX,
            f64::INFINITY,
        ];

        for pair in samples.windows(2) {
            assert!(
                encode_float64(pair[0]).unwrap() < encode_float64(pair[1]).unwrap(),
                "expected encode({}) < encode({})",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_float64_roundtrip() {
        for value in [f64::NEG_INFINITY, -2.5, 0.0, 0.1, 7.0, f64::INFINITY] {
            assert_eq!(decode_float64(encode_float64(value).unwrap()), value);
        }
    }

    #[test]
    fn test_float64_rejects_nan() {
        assert!(encode_float64(f64::NAN).is_err());
    }
}
