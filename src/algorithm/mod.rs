//! Algorithm implementations for matched study construction
//!
//! This module contains the matching engine that pairs treated units with
//! controls drawn from the candidate pool.

pub mod matching;
