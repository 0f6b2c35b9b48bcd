use serde::{Deserialize, Serialize};

/// Last recorded fingerprints of an identity, kept for change detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksums {
    pub standard: Option<String>,
    pub smart: Option<String>,
}
