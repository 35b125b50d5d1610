// src/checker/mod.rs
// =============================================================================
// Link liveness checking.
//
// The checker answers one question — is this link reachable — and converts
// every possible failure into data (a dead verdict plus reason) so that a
// single bad link can never abort a crawl.
// =============================================================================

mod http;

pub use http::{DeadReason, LivenessChecker, Verdict};
