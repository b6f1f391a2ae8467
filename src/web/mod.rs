pub mod routes;

use axum::response::Redirect;
use axum::routing::{delete, get, get_service, post};
use axum::Router;
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::store::ActivityDirectory;

/// Build the full application router over an injected directory. Tests
/// drive this exact router in-process.
pub fn router(directory: ActivityDirectory) -> Router {
    Router::new()
        // The landing page lives under /static; the original suite expects
        // a 307 from the root, so Redirect::temporary rather than ::to.
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route(
            "/activities",
            get(routes::activities::list_activities_handler),
        )
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(routes::activities::unregister_handler),
        )
        // Static files
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        // Layers
        .layer(CatchPanicLayer::new())
        // State
        .with_state(directory)
}
