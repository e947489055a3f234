use serde::{Deserialize, Serialize};

// One extracurricular activity; the registry key is its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Index of the first participant whose email matches `email` ignoring case.
    pub fn position_of(&self, email: &str) -> Option<usize> {
        let needle = email.to_lowercase();
        self.participants
            .iter()
            .position(|p| p.to_lowercase() == needle)
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.position_of(email).is_some()
    }
}
