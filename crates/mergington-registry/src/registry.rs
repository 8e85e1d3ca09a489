//! The activity registry.
//!
//! The set of activities is fixed when the registry is built, so name
//! lookups go through an immutable index. Each activity keeps its
//! participants behind its own lock: a signup or unregister holds that
//! lock across the membership check and the mutation.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::activity::{Activity, ActivityListing};
use crate::catalog::Catalog;
use crate::error::{CatalogError, RegistryError};

struct Slot {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Mutex<Vec<String>>,
}

impl Slot {
    fn from_activity(activity: Activity) -> Self {
        Self {
            name: activity.name,
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: Mutex::new(activity.participants),
        }
    }

    fn snapshot(&self) -> Activity {
        Activity {
            name: self.name.clone(),
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.lock().clone(),
        }
    }
}

/// Thread-safe store of activities and their participants.
///
/// Share it between handlers behind an `Arc`.
pub struct ActivityRegistry {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
}

impl ActivityRegistry {
    /// Build a registry from a validated catalog.
    pub fn from_catalog(catalog: Catalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        let registry = Self::build(catalog);
        debug!("Activity registry seeded with {} activities", registry.len());
        Ok(registry)
    }

    /// Registry seeded with the built-in school catalog.
    pub fn with_default_catalog() -> Self {
        Self::build(Catalog::default_school())
    }

    fn build(catalog: Catalog) -> Self {
        let slots: Vec<Slot> = catalog
            .activities
            .into_iter()
            .map(Slot::from_activity)
            .collect();
        let index = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (slot.name.clone(), i))
            .collect();
        Self { slots, index }
    }

    fn slot(&self, activity_name: &str) -> Result<&Slot, RegistryError> {
        self.index
            .get(activity_name)
            .map(|&i| &self.slots[i])
            .ok_or_else(|| RegistryError::NotFound(activity_name.to_string()))
    }

    /// Snapshot of every activity in catalog order.
    pub fn list_activities(&self) -> ActivityListing {
        ActivityListing::new(self.slots.iter().map(Slot::snapshot).collect())
    }

    /// Snapshot of a single activity.
    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.slot(activity_name).ok().map(Slot::snapshot)
    }

    /// Add `email` to the activity's participants.
    ///
    /// Returns the confirmation message shown to the student.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let slot = self.slot(activity_name).inspect_err(|_| {
            warn!("Signup rejected: unknown activity '{}'", activity_name);
        })?;

        let mut participants = slot.participants.lock();
        if participants.iter().any(|p| p == email) {
            warn!("Signup rejected: {} already in '{}'", email, activity_name);
            return Err(RegistryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }
        participants.push(email.to_string());
        drop(participants);

        info!("Signed up {} for '{}'", email, activity_name);
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Remove `email` from the activity's participants, keeping the order
    /// of everyone else.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let slot = self.slot(activity_name).inspect_err(|_| {
            warn!("Unregister rejected: unknown activity '{}'", activity_name);
        })?;

        let mut participants = slot.participants.lock();
        let Some(position) = participants.iter().position(|p| p == email) else {
            warn!("Unregister rejected: {} not in '{}'", email, activity_name);
            return Err(RegistryError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        };
        participants.remove(position);
        drop(participants);

        info!("Unregistered {} from '{}'", email, activity_name);
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }

    pub fn contains(&self, activity_name: &str) -> bool {
        self.index.contains_key(activity_name)
    }

    /// Activity names in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
