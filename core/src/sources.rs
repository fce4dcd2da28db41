//! Candidate hostname sources.
//!
//! Each source degrades to an empty contribution on failure; a broken or
//! unreachable source never aborts the scan on its own.

pub mod crtsh;
pub mod wordlist;
