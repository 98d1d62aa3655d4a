//! Embedded word lists
//!
//! Danish word lists compiled into the binary at build time, one per
//! playable word length.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/five.rs"));
include!(concat!(env!("OUT_DIR"), "/six.rs"));
include!(concat!(env!("OUT_DIR"), "/seven.rs"));
