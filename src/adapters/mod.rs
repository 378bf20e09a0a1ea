//! Port implementations.
//!
//! - `live`: real network and disk.
//! - `memory`: in-process key-value storage.
//! - `recording`: wrap another adapter and capture calls to a cassette.
//! - `replaying`: serve calls from a cassette.

pub mod live;
pub mod memory;
pub mod recording;
pub mod replaying;
