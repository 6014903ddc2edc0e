use serde::{Deserialize, Serialize};

/// One submitted candidate form.
/// Field order here is the key order written to the store file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Years of experience, bounded to [0, 50] at the intake boundary.
    pub experience: u32,
    pub desired_positions: String,
    pub tech_stack: String,
}

/// The persisted collection: a single top-level object whose only key is
/// `candidates`, holding records in submission order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CandidateStoreFile {
    pub candidates: Vec<CandidateRecord>,
}
