//! Embedded word lists
//!
//! Word lists compiled into the binary at build time, indexed by `difficulty - 3`.

include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));
include!(concat!(env!("OUT_DIR"), "/all.rs"));
