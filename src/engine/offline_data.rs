//! Prefix tables compiled from `resources/` by `build/rust_build.rs`.
//!
//! Every table is sorted by key, which [`super::prefix_map::PrefixMap`]
//! relies on for binary search.

include!(concat!(env!("OUT_DIR"), "/offline_data.rs"));
