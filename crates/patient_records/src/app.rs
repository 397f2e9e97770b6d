use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        patients::{create_patient, delete_patient, get_patient, list_patients, update_patient},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let patient_routes = Router::new()
        .route(
            "/patient",
            get(list_patients).post(create_patient).put(update_patient),
        )
        .route("/patient/{id}", get(get_patient).delete(delete_patient))
        .layer(cors);

    let timeout = state.config.request_timeout();

    Router::new()
        .merge(patient_routes)
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}
