//! Entity kinds making up the background, one module per layer.
//!
//! Each module holds plain data records and free functions that initialise,
//! update and draw a whole slice of them.

pub mod backdrop;
pub mod connection;
pub mod orb;
pub mod particle;
pub mod scan;
pub mod threat;
