//! Embedded word lists
//!
//! Polish word lists compiled into the binary at build time, one answer
//! list per supported word length plus the extra valid-guess pool.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/answers_4.rs"));
include!(concat!(env!("OUT_DIR"), "/answers_5.rs"));
include!(concat!(env!("OUT_DIR"), "/answers_6.rs"));
include!(concat!(env!("OUT_DIR"), "/answers_7.rs"));
include!(concat!(env!("OUT_DIR"), "/valid_extra.rs"));
