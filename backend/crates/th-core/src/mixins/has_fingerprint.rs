use crate::{ChecksumFields, Checksums, Fingerprint};

/// Entities whose meaningful content can be summarised by fingerprints.
///
/// The standard subset tracks everything a client edits; the smart subset
/// tracks what matters for listing and display.
pub trait HasFingerprint {
    fn standard_checksum_fields(&self) -> ChecksumFields;

    fn smart_checksum_fields(&self) -> ChecksumFields;

    fn standard_fingerprint(&self) -> Fingerprint {
        self.standard_checksum_fields().fingerprint()
    }

    fn smart_fingerprint(&self) -> Fingerprint {
        self.smart_checksum_fields().fingerprint()
    }

    fn checksums(&self) -> Checksums {
        Checksums {
            standard: Some(self.standard_fingerprint().into_string()),
            smart: Some(self.smart_fingerprint().into_string()),
        }
    }
}
