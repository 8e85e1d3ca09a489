//! Seed data for the registry.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::activity::Activity;
use crate::error::CatalogError;

/// The fixed set of activities a registry is seeded with.
///
/// A catalog file is TOML with one `[[activities]]` table per activity:
///
/// ```toml
/// [[activities]]
/// name = "Chess Club"
/// description = "Learn strategies and compete in chess tournaments"
/// schedule = "Fridays, 3:30 PM - 5:00 PM"
/// max_participants = 12
/// participants = ["michael@mergington.edu"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Catalog {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// Load a catalog from a TOML file. The result is not yet validated.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        debug!(
            "Loaded {} activities from {}",
            catalog.activities.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// Check that names are non-empty and unique, and that no activity
    /// lists the same participant twice.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = HashSet::new();
        for activity in &self.activities {
            if activity.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !names.insert(activity.name.as_str()) {
                return Err(CatalogError::DuplicateActivity(activity.name.clone()));
            }

            let mut emails = HashSet::new();
            for email in &activity.participants {
                if !emails.insert(email.as_str()) {
                    return Err(CatalogError::DuplicateParticipant {
                        activity: activity.name.clone(),
                        email: email.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// The activities offered at Mergington High School.
    pub fn default_school() -> Self {
        Self::new(vec![
            Activity::new(
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
            Activity::new(
                "Programming Class",
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
            Activity::new(
                "Gym Class",
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
            Activity::new(
                "Basketball Team",
                "Practice and compete in inter-school basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(["liam@mergington.edu"]),
            Activity::new(
                "Swimming Club",
                "Swim training and water safety for all levels",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["ava@mergington.edu"]),
            Activity::new(
                "Art Club",
                "Explore painting, drawing, and mixed media projects",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["amelia@mergington.edu"]),
            Activity::new(
                "Drama Club",
                "Act, direct, and stage school theater productions",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            )
            .with_participants(["noah@mergington.edu", "mia@mergington.edu"]),
            Activity::new(
                "Math Club",
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["ethan@mergington.edu"]),
            Activity::new(
                "Debate Team",
                "Build public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
            )
            .with_participants(["charlotte@mergington.edu"]),
        ])
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
