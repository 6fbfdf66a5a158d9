//! 160-bit unsigned identifiers
//!
//! `UInt160` is the node and key identifier of the Kademlia overlay: a
//! fixed-size value stored as five 32-bit limbs, most significant limb
//! first. The limb layout is exactly what [`crate::printer`] renders, so a
//! value dumped from memory and a value built here print the same way.
//!
//! Only the operations identifiers need are provided: parsing and
//! printing, XOR distance, bit length, comparisons and wrapping arithmetic
//! in the ring of integers modulo 2^160.

use rand::Rng;
use sha1::{Digest, Sha1};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::printer::{self, HEX_WIDTH, LIMB_COUNT, LimbArray};

mod ops;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UInt160Error {
    #[error("Invalid hex string: expected 40 characters, got {0}")]
    BadLength(usize),

    #[error("Invalid hex string: bad character {0:?}")]
    BadCharacter(char),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Fixed-size 160-bit unsigned integer
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UInt160 {
    limbs: LimbArray,
}

impl UInt160 {
    /// Length of the hex representation
    pub const HEX_SIZE: usize = HEX_WIDTH;

    /// Size of the big-endian byte representation
    pub const BYTES: usize = 20;

    pub const ZERO: Self = Self::from_limbs([0; LIMB_COUNT]);
    pub const ONE: Self = Self::from_limbs([0, 0, 0, 0, 1]);
    pub const MAX: Self = Self::from_limbs([u32::MAX; LIMB_COUNT]);

    #[must_use]
    pub const fn from_limbs(limbs: LimbArray) -> Self {
        Self { limbs }
    }

    /// Limbs, most significant first
    #[must_use]
    pub const fn limbs(&self) -> &LimbArray {
        &self.limbs
    }

    #[must_use]
    pub fn from_be_bytes(bytes: [u8; Self::BYTES]) -> Self {
        let mut limbs = [0u32; LIMB_COUNT];

        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(4)) {
            *limb = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        Self { limbs }
    }

    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];

        for (chunk, limb) in bytes.chunks_exact_mut(4).zip(self.limbs.iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        bytes
    }

    /// Draw a random identifier, one limb at a time
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut limbs = [0u32; LIMB_COUNT];
        for limb in &mut limbs {
            *limb = rng.r#gen();
        }

        Self { limbs }
    }

    /// SHA-1 digest of `data`, the usual way keys are derived
    #[must_use]
    pub fn from_digest(data: impl AsRef<[u8]>) -> Self {
        let digest = Sha1::digest(data.as_ref());
        let mut bytes = [0u8; Self::BYTES];
        bytes.copy_from_slice(&digest);

        Self::from_be_bytes(bytes)
    }

    /// XOR distance between two identifiers
    #[must_use]
    pub fn distance(&self, other: &Self) -> Self {
        *self ^ *other
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    /// Position of the highest bit set, 0 for zero
    #[must_use]
    pub fn bit_length(&self) -> u32 {
        self.limbs
            .iter()
            .position(|&limb| limb != 0)
            .map_or(0, |i| {
                let below = (LIMB_COUNT - 1 - i) as u32 * u32::BITS;
                below + (u32::BITS - self.limbs[i].leading_zeros())
            })
    }

    /// Test bit `i`, counting from the least significant bit
    #[must_use]
    pub fn bit(&self, i: u32) -> bool {
        if i >= 160 {
            return false;
        }
        let limb = self.limbs[LIMB_COUNT - 1 - (i / 32) as usize];
        (limb >> (i % 32)) & 1 == 1
    }

    /// Uppercase fixed-width rendering, as shown by a debugger
    #[must_use]
    pub fn to_upper_hex(&self) -> String {
        printer::format(&self.limbs)
    }
}

impl From<u64> for UInt160 {
    fn from(n: u64) -> Self {
        Self::from_limbs([0, 0, 0, (n >> 32) as u32, n as u32])
    }
}

impl From<u32> for UInt160 {
    fn from(n: u32) -> Self {
        Self::from_limbs([0, 0, 0, 0, n])
    }
}

impl From<u16> for UInt160 {
    fn from(n: u16) -> Self {
        Self::from(u32::from(n))
    }
}

impl From<u8> for UInt160 {
    fn from(n: u8) -> Self {
        Self::from(u32::from(n))
    }
}

impl From<LimbArray> for UInt160 {
    fn from(limbs: LimbArray) -> Self {
        Self::from_limbs(limbs)
    }
}

impl FromStr for UInt160 {
    type Err = UInt160Error;

    /// Parse exactly 40 hex characters, either case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != Self::HEX_SIZE {
            return Err(UInt160Error::BadLength(len));
        }
        // The decoder reports bytes, not chars
        if let Some(c) = s.chars().find(|c| !c.is_ascii()) {
            return Err(UInt160Error::BadCharacter(c));
        }

        let mut bytes = [0u8; Self::BYTES];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| match e {
            hex::FromHexError::InvalidHexCharacter { c, .. } => UInt160Error::BadCharacter(c),
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                UInt160Error::BadLength(len)
            }
        })?;

        Ok(Self::from_be_bytes(bytes))
    }
}

impl fmt::LowerHex for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for limb in &self.limbs {
            write!(f, "{limb:08x}")?;
        }

        Ok(())
    }
}

impl fmt::UpperHex for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        printer::format_into(f, &self.limbs)
    }
}

impl fmt::Display for UInt160 {
    /// 40 lowercase hex characters
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(UInt160::default(), UInt160::ZERO);
        assert_eq!(UInt160::default(), UInt160::from(0u32));
        assert!(UInt160::ZERO.is_zero());
        assert!(!UInt160::ONE.is_zero());
    }

    #[test]
    fn test_init_from_int() {
        let values: [u64; 6] = [0, 1, 255, 65000, 4_000_000, 10_000_000_000];

        for val in values {
            assert_eq!(
                UInt160::from(val).to_string(),
                format!("{val:040x}"),
                "testing init from {val}"
            );
        }
        assert_eq!(UInt160::from(0xABu8), UInt160::from(0xABu64));
        assert_eq!(UInt160::from(0xABCDu16), UInt160::from(0xABCDu64));
    }

    #[test]
    fn test_init_from_hex() {
        let hex = "c544b5e4a1afcbb5d2de772d7a8df76f32557147";
        let n: UInt160 = hex.parse().unwrap();
        assert_eq!(n.to_string(), hex);
        assert_eq!(n.to_upper_hex(), hex.to_uppercase());

        let upper: UInt160 = hex.to_uppercase().parse().unwrap();
        assert_eq!(upper, n);
    }

    #[test]
    fn test_init_from_bad_hex() {
        assert_eq!(
            "deadbeef".parse::<UInt160>(),
            Err(UInt160Error::BadLength(8))
        );
        assert_eq!(
            "One cannot step twice in the same river.".parse::<UInt160>(),
            Err(UInt160Error::BadCharacter('O'))
        );
        assert_eq!(
            format!("{}g", "0".repeat(39)).parse::<UInt160>(),
            Err(UInt160Error::BadCharacter('g'))
        );
    }

    #[test]
    fn test_bad_hex_counts_characters() {
        // 39 ASCII digits plus one two-byte char: 40 chars, 41 bytes
        let accented = format!("{}é", "0".repeat(39));
        assert_eq!(
            accented.parse::<UInt160>(),
            Err(UInt160Error::BadCharacter('é'))
        );

        let long = format!("{}é", "0".repeat(40));
        assert_eq!(long.parse::<UInt160>(), Err(UInt160Error::BadLength(41)));
    }

    #[test]
    fn test_formatting_traits() {
        let n = UInt160::from_limbs([0xDEAD_BEEF, 0x1234_5678, 0, 0, 0xFFFF_FFFF]);
        assert_eq!(format!("{n:X}"), "DEADBEEF123456780000000000000000FFFFFFFF");
        assert_eq!(format!("{n:x}"), "deadbeef123456780000000000000000ffffffff");
        assert_eq!(format!("{n:#X}"), "0xDEADBEEF123456780000000000000000FFFFFFFF");
        assert_eq!(format!("{n}"), format!("{n:x}"));
        assert_eq!(format!("{n:X}"), printer::format(n.limbs()));
    }

    #[test]
    fn test_bytes_round_trip_layout() {
        let n = UInt160::from_limbs([0x0102_0304, 0, 0, 0, 0x0A0B_0C0D]);
        let bytes = n.to_be_bytes();
        assert_eq!(&bytes[..4], &[1, 2, 3, 4]);
        assert_eq!(&bytes[16..], &[0x0A, 0x0B, 0x0C, 0x0D]);
        assert_eq!(UInt160::from_be_bytes(bytes), n);
    }

    #[test]
    fn test_bit_length() {
        let cases: [(UInt160, u32); 10] = [
            (UInt160::from(0u32), 0),
            (UInt160::from(1u32), 1),
            (UInt160::from(2u32), 2),
            (UInt160::from(3u32), 2),
            (UInt160::from(4u32), 3),
            (UInt160::from(7u32), 3),
            (UInt160::from(1u64 << 32), 33),
            (UInt160::from_limbs([0, 0, 0, 1, 0]), 33),
            (UInt160::MAX, 160),
            (
                "8f0b49e7cdc5c120599cfe86886b622b2969e24f".parse().unwrap(),
                160,
            ),
        ];

        for (n, expected) in cases {
            assert_eq!(n.bit_length(), expected, "bit length of {n}");
        }
    }

    #[test]
    fn test_bit_length_of_zero() {
        assert_eq!(UInt160::ZERO.bit_length(), 0);
        assert_eq!(UInt160::default().bit_length(), 0);

        let a: UInt160 = "c544b5e4a1afcbb5d2de772d7a8df76f32557147".parse().unwrap();
        assert_eq!(a.distance(&a).bit_length(), 0);
    }

    #[test]
    fn test_bit() {
        let n = UInt160::from(0b101u32) | (UInt160::ONE << 159);
        assert!(n.bit(0));
        assert!(!n.bit(1));
        assert!(n.bit(2));
        assert!(n.bit(159));
        assert!(!n.bit(160));
    }

    #[test]
    fn test_ordering_is_numeric() {
        let small = UInt160::from(u64::MAX);
        let big = UInt160::from_limbs([0, 0, 1, 0, 0]);
        assert!(small < big);
        assert!(UInt160::ZERO < UInt160::ONE);
        assert!(UInt160::MAX > big);
    }

    #[test]
    fn test_distance() {
        let a: UInt160 = "c544b5e4a1afcbb5d2de772d7a8df76f32557147".parse().unwrap();
        let b: UInt160 = "8f0b49e7cdc5c120599cfe86886b622b2969e24f".parse().unwrap();

        assert_eq!(a.distance(&a), UInt160::ZERO);
        assert_eq!(a.distance(&b), b.distance(&a));
        assert_eq!(a.distance(&b).distance(&b), a);
    }

    #[test]
    fn test_from_digest() {
        // SHA-1("abc")
        let key = UInt160::from_digest("abc");
        assert_eq!(key.to_string(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_random_is_seeded() {
        let a = UInt160::random(&mut ChaCha8Rng::seed_from_u64(8));
        let b = UInt160::random(&mut ChaCha8Rng::seed_from_u64(8));
        let c = UInt160::random(&mut ChaCha8Rng::seed_from_u64(9));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
