//! Puzzle sources that hand back a raw payload for normalization.

pub mod nyt;
