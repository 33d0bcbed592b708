//! Post-search processing of a finished placement

/// Border stripping and image concatenation
pub mod assembly;
/// Motif definition and orientation-aware scanning
pub mod motif;
