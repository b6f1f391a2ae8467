use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::services::directory_service;
use crate::store::ActivityDirectory;

pub async fn list_activities_handler(
    State(directory): State<ActivityDirectory>,
) -> impl IntoResponse {
    Json(directory_service::list_activities(&directory))
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    /// Taken as-is; any non-empty string counts as an email.
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(directory): State<ActivityDirectory>,
) -> impl IntoResponse {
    match directory_service::signup(&directory, &activity_name, &query.email) {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(e) => {
            warn!("Signup rejected for {} on {}: {}", query.email, activity_name, e);
            e.into_response()
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(directory): State<ActivityDirectory>,
) -> impl IntoResponse {
    match directory_service::unregister(&directory, &activity_name, &query.email) {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(e) => {
            warn!(
                "Unregister rejected for {} on {}: {}",
                query.email, activity_name, e
            );
            e.into_response()
        }
    }
}
