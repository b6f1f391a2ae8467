use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Activity;

/// The full set of activities, keyed by name and kept in seed order.
pub type Directory = IndexMap<String, Activity>;

/// Shared in-memory activity directory. Cheap to clone; every clone sees
/// the same underlying map. Passed to handlers as axum `State` so tests
/// can build a fresh, deterministic one per case.
#[derive(Clone)]
pub struct ActivityDirectory {
    inner: Arc<RwLock<Directory>>,
}

impl ActivityDirectory {
    /// Directory preloaded with the Mergington High fixture activities.
    /// Activities are never created or deleted after this point; only the
    /// participant lists change.
    pub fn seeded() -> Self {
        let mut directory = Directory::new();
        directory.insert(
            "Chess Club".to_string(),
            Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: vec![
                    "michael@mergington.edu".to_string(),
                    "daniel@mergington.edu".to_string(),
                ],
            },
        );
        directory.insert(
            "Programming Class".to_string(),
            Activity {
                description: "Learn programming fundamentals and build software projects"
                    .to_string(),
                schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
                max_participants: 20,
                participants: vec![
                    "emma@mergington.edu".to_string(),
                    "sophia@mergington.edu".to_string(),
                ],
            },
        );
        directory.insert(
            "Gym Class".to_string(),
            Activity {
                description: "Physical education and sports activities".to_string(),
                schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
                max_participants: 30,
                participants: vec![
                    "john@mergington.edu".to_string(),
                    "olivia@mergington.edu".to_string(),
                ],
            },
        );
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Directory> {
        self.inner.read()
    }

    /// Write guard for signup/unregister. Holding it for the whole check +
    /// mutate sequence keeps participant lists duplicate-free under
    /// concurrent requests.
    pub fn write(&self) -> RwLockWriteGuard<'_, Directory> {
        self.inner.write()
    }
}
