use serde::{Deserialize, Serialize};

/// One extracurricular activity. The activity name is the directory key,
/// not a field, so the directory serializes as a JSON object keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Registered emails, in signup order. No duplicates within one activity.
    pub participants: Vec<String>,
}
