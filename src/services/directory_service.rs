use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::info;

use crate::store::{ActivityDirectory, Directory};

/// Why a signup or unregister was rejected. Every variant reaches the
/// caller as an HTTP error with a human-readable `detail` body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadyRegistered,
    #[error("Participant not found in this activity")]
    ParticipantNotFound,
}

impl DirectoryError {
    pub fn status(&self) -> StatusCode {
        match self {
            DirectoryError::ActivityNotFound => StatusCode::NOT_FOUND,
            DirectoryError::AlreadyRegistered => StatusCode::BAD_REQUEST,
            DirectoryError::ParticipantNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct SignupConfirmation {
    pub message: String,
}

/// Full snapshot of the directory, in seed order.
pub fn list_activities(directory: &ActivityDirectory) -> Directory {
    directory.read().clone()
}

pub fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation, DirectoryError> {
    let mut dir = directory.write();
    let activity = dir
        .get_mut(activity_name)
        .ok_or(DirectoryError::ActivityNotFound)?;

    if activity.participants.iter().any(|p| p == email) {
        return Err(DirectoryError::AlreadyRegistered);
    }

    // Capacity is a hint only; a full roster does not reject the signup.
    activity.participants.push(email.to_string());
    info!("Signed up {} for {}", email, activity_name);

    Ok(SignupConfirmation {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation, DirectoryError> {
    let mut dir = directory.write();
    let activity = dir
        .get_mut(activity_name)
        .ok_or(DirectoryError::ActivityNotFound)?;

    let position = activity
        .participants
        .iter()
        .position(|p| p == email)
        .ok_or(DirectoryError::ParticipantNotFound)?;

    activity.participants.remove(position);
    info!("Unregistered {} from {}", email, activity_name);

    Ok(SignupConfirmation {
        message: format!("Unregistered {} from {}", email, activity_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_returns_seeded_activities_in_order() {
        let directory = ActivityDirectory::seeded();
        let snapshot = list_activities(&directory);

        let names: Vec<&String> = snapshot.keys().collect();
        assert_eq!(names, ["Chess Club", "Programming Class", "Gym Class"]);
        assert_eq!(snapshot["Chess Club"].max_participants, 12);
        assert_eq!(snapshot["Chess Club"].participants.len(), 2);
    }

    #[test]
    fn signup_appends_in_insertion_order() {
        let directory = ActivityDirectory::seeded();

        let confirmation =
            signup(&directory, "Chess Club", "newstudent@mergington.edu").unwrap();
        assert!(confirmation.message.contains("Signed up"));
        assert!(confirmation.message.contains("newstudent@mergington.edu"));

        let snapshot = list_activities(&directory);
        assert_eq!(
            snapshot["Chess Club"].participants,
            [
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "newstudent@mergington.edu",
            ]
        );
    }

    #[test]
    fn signup_rejects_duplicate_email() {
        let directory = ActivityDirectory::seeded();

        let err = signup(&directory, "Chess Club", "michael@mergington.edu").unwrap_err();
        assert_eq!(err, DirectoryError::AlreadyRegistered);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        // Roster untouched by the rejected attempt.
        let snapshot = list_activities(&directory);
        assert_eq!(snapshot["Chess Club"].participants.len(), 2);
    }

    #[test]
    fn signup_unknown_activity_is_not_found() {
        let directory = ActivityDirectory::seeded();
        let err = signup(&directory, "Nonexistent Club", "a@mergington.edu").unwrap_err();
        assert_eq!(err, DirectoryError::ActivityNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unregister_removes_only_the_target() {
        let directory = ActivityDirectory::seeded();

        unregister(&directory, "Chess Club", "michael@mergington.edu").unwrap();

        let snapshot = list_activities(&directory);
        assert_eq!(snapshot["Chess Club"].participants, ["daniel@mergington.edu"]);
    }

    #[test]
    fn unregister_missing_participant_is_not_found() {
        let directory = ActivityDirectory::seeded();
        let err =
            unregister(&directory, "Chess Club", "nonexistent@mergington.edu").unwrap_err();
        assert_eq!(err, DirectoryError::ParticipantNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.to_string().to_lowercase().contains("not found"));
    }

    #[test]
    fn emptied_roster_stays_present_and_empty() {
        let directory = ActivityDirectory::seeded();

        unregister(&directory, "Chess Club", "michael@mergington.edu").unwrap();
        unregister(&directory, "Chess Club", "daniel@mergington.edu").unwrap();

        let snapshot = list_activities(&directory);
        assert!(snapshot["Chess Club"].participants.is_empty());
    }

    #[test]
    fn membership_is_independent_across_activities() {
        let directory = ActivityDirectory::seeded();
        let student = "versatile@mergington.edu";

        signup(&directory, "Chess Club", student).unwrap();
        signup(&directory, "Programming Class", student).unwrap();
        unregister(&directory, "Chess Club", student).unwrap();

        let snapshot = list_activities(&directory);
        assert!(!snapshot["Chess Club"]
            .participants
            .iter()
            .any(|p| p == student));
        assert!(snapshot["Programming Class"]
            .participants
            .iter()
            .any(|p| p == student));
    }
}
