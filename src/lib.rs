//! Render and inspect 160-bit Kademlia identifiers.
//!
//! - `printer`: fixed-width hex rendering of five-limb values, the form a
//!   debugger pretty-printer shows, plus a parser for textual limb dumps
//! - `uint160`: the identifier value type itself
//! - `core`, `cli`: a command-line host around both

pub mod cli;
pub mod config;
pub mod core;
pub mod printer;
pub mod uint160;
pub mod version;

pub use crate::core::{Description, Inspector};
pub use printer::{HexFormatter, LimbArray, PrinterError, format, format_slice};
pub use uint160::{UInt160, UInt160Error};
