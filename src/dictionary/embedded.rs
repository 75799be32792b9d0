//! Embedded word lists
//!
//! Word lists compiled into the binary at build time from `data/dict/`.

// Include generated table from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
