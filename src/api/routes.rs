//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateNoteRequest, ErrorResponse, HealthResponse, NoteResponse, UpdateNoteRequest,
};
use super::state::AppState;
use super::static_assets;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jot API",
        version = "0.1.0",
        description = "Notes CRUD API over a local SQLite store",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        handlers::list_notes,
        handlers::get_note,
        handlers::create_note,
        handlers::update_note,
        handlers::delete_note,
    ),
    components(
        schemas(
            HealthResponse,
            NoteResponse,
            CreateNoteRequest,
            UpdateNoteRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health endpoints"),
        (name = "notes", description = "Note management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the router: note routes, health, API docs, static fallback.
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new().route("/api/health", get(handlers::health));

    // Note routes (generic over Database)
    let note_routes = routes!(D => {
        get "/api/notes" => handlers::list_notes,
        post "/api/notes" => handlers::create_note,
        get "/api/notes/{id}" => handlers::get_note,
        put "/api/notes/{id}" => handlers::update_note,
        delete "/api/notes/{id}" => handlers::delete_note,
    });

    system_routes
        .merge(note_routes)
        .merge(Scalar::with_url("/docs", api))
        .fallback(static_assets::serve_frontend)
        .with_state(state)
}
