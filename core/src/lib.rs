//! Core enumeration and probing logic for subsnare.
//!
//! Candidate hostnames flow from the [`sources`] (passive certificate
//! transparency, wordlist expansion) into a deduplicated [`candidates`]
//! set, which the [`scanner`] fans out over a bounded worker pool.

pub mod candidates;
pub mod scanner;
pub mod sources;
