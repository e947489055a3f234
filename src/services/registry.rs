use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::error::{ActivityError, SeedError};
use crate::models::{seed, Activity};

pub type Activities = IndexMap<String, Activity>;

/// Shared handle to the in-memory activity registry.
///
/// The key set is fixed at construction; only participant lists change. Every
/// check-then-mutate sequence runs under the write lock, so concurrent signups
/// can never push an activity past its capacity.
#[derive(Clone, Debug)]
pub struct ActivityRegistry {
    inner: Arc<RwLock<Activities>>,
}

impl ActivityRegistry {
    pub fn seeded() -> Self {
        // The built-in seed is covered by tests, it always validates.
        let activities = seed::default_activities().into_iter().collect();
        Self::wrap(activities)
    }

    pub fn from_activities<I>(activities: I) -> Result<Self, SeedError>
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        let activities: Activities = activities.into_iter().collect();
        for (name, activity) in &activities {
            validate(name, activity)?;
        }
        Ok(Self::wrap(activities))
    }

    /// Loads a registry from a JSON file shaped like the `GET /activities` body.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let activities: Activities =
            serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_activities(activities)
    }

    fn wrap(activities: Activities) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub fn snapshot(&self) -> Activities {
        self.inner.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.inner.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Appends `email` verbatim. Duplicate check runs before the capacity check.
    pub fn signup(&self, name: &str, email: &str) -> Result<(), ActivityError> {
        let mut activities = self.inner.write();
        let activity = activities
            .get_mut(name)
            .ok_or(ActivityError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(ActivityError::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(ActivityError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes the matching participant and returns the stored spelling.
    pub fn unregister(&self, name: &str, email: &str) -> Result<String, ActivityError> {
        let mut activities = self.inner.write();
        let activity = activities
            .get_mut(name)
            .ok_or(ActivityError::ActivityNotFound)?;

        let index = activity
            .position_of(email)
            .ok_or(ActivityError::NotRegistered)?;
        Ok(activity.participants.remove(index))
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

fn validate(name: &str, activity: &Activity) -> Result<(), SeedError> {
    if activity.max_participants == 0 {
        return Err(SeedError::ZeroCapacity(name.to_string()));
    }
    if activity.participants.len() > activity.max_participants as usize {
        return Err(SeedError::OverCapacity {
            name: name.to_string(),
            count: activity.participants.len(),
            max: activity.max_participants,
        });
    }
    for (i, email) in activity.participants.iter().enumerate() {
        if activity.position_of(email) != Some(i) {
            return Err(SeedError::DuplicateParticipant {
                name: name.to_string(),
                email: email.clone(),
            });
        }
    }
    Ok(())
}
