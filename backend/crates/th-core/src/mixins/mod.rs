pub mod has_fingerprint;
pub mod has_logo;
pub mod has_source_container;
