//! Integration test crate for the prguard workspace. The tests live in the
//! crate root next to this manifest; see the `[[test]]` tables in Cargo.toml.
