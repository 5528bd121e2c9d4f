use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - energy mode
/// - pediatric flag
pub fn fingerprint_for_finding(check_id: &str, code: &str, mode: &str, pediatric: bool) -> String {
    let patient = if pediatric { "pediatric" } else { "adult" };
    let canonical = [check_id, code, mode, patient].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
