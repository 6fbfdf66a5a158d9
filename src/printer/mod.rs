//! Fixed-width hexadecimal rendering of 160-bit limb arrays
//!
//! A 160-bit identifier is stored as five 32-bit limbs, most significant
//! limb first. Debuggers show such a value as a single 40-character
//! uppercase hex string: every limb contributes exactly eight digits,
//! zero-padded, so leading zero limbs are never elided.
//!
//! The functions here are pure. Binding them to a type name inside a
//! debugger (or any other display host) is left to the caller.

use std::fmt;
use thiserror::Error;

pub mod limbs;

/// Number of 32-bit limbs in a 160-bit value
pub const LIMB_COUNT: usize = 5;

/// Hex digits produced for one limb
pub const LIMB_HEX_WIDTH: usize = 8;

/// Length of a rendered value
pub const HEX_WIDTH: usize = LIMB_COUNT * LIMB_HEX_WIDTH;

/// Limbs of a 160-bit value, index 0 holds the most significant bits
pub type LimbArray = [u32; LIMB_COUNT];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrinterError {
    #[error("Invalid input: expected {expected} limbs, got {actual}")]
    InvalidInput { expected: usize, actual: usize },

    #[error("Invalid limb list: {0}")]
    Parse(String),
}

/// Render five limbs as 40 uppercase hex characters
#[must_use]
pub fn format(limbs: &LimbArray) -> String {
    let mut out = String::with_capacity(HEX_WIDTH);
    // Writing into a String cannot fail
    let _ = format_into(&mut out, limbs);
    out
}

/// Render a limb sequence of unchecked length
///
/// # Errors
///
/// Returns `PrinterError::InvalidInput` when `limbs` does not hold exactly
/// [`LIMB_COUNT`] elements. Nothing is rendered in that case.
pub fn format_slice(limbs: &[u32]) -> Result<String, PrinterError> {
    let limbs: &LimbArray = limbs
        .try_into()
        .map_err(|_| PrinterError::InvalidInput {
            expected: LIMB_COUNT,
            actual: limbs.len(),
        })?;

    Ok(format(limbs))
}

/// Write the 40-character rendering of `limbs` into `out`
pub fn format_into<W: fmt::Write>(out: &mut W, limbs: &LimbArray) -> fmt::Result {
    for limb in limbs {
        write!(out, "{limb:08X}")?;
    }

    Ok(())
}

/// Stateless handle on [`format`], for hosts that register a printer value
/// against a type name rather than a bare function.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexFormatter;

impl HexFormatter {
    #[must_use]
    pub fn format(&self, limbs: &LimbArray) -> String {
        format(limbs)
    }

    /// See [`format_slice`]
    pub fn format_slice(&self, limbs: &[u32]) -> Result<String, PrinterError> {
        format_slice(limbs)
    }
}
