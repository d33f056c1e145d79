//! IntegrityVerifier port
//!
//! Recomputes fingerprints for a recorded version and compares them against
//! the values captured at build time. Always produces a structured result;
//! missing files become failed checks rather than errors.

use crate::domain::entities::Version;
use crate::domain::value_objects::VerificationResult;

pub trait IntegrityVerifier {
    fn verify(&self, version: &Version) -> VerificationResult;
}
