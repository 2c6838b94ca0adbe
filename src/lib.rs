//! Small helpers shared by emulation front-ends.
//!
//! - `encoding::hex` renders byte buffers (ROM hashes, save headers, controller ids) as uppercase hex
//! - `geometry` describes emulated screen sizes and rects
//! - `region` picks the user's release region from locale or stored override

#[macro_use]
extern crate derive_more;
#[cfg(feature = "serialize")]
#[macro_use]
extern crate serde_derive;

pub(crate) mod utils;
pub mod fuzz;
pub mod encoding;
pub mod geometry;
pub mod preferences;
pub mod region;

pub use crate::encoding::hex::{hex_string, HexString};
