//! Landing page routes.

use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tower_http::services::ServeDir;

/// GET / — the landing page, embedded at compile time.
async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// Build the page routes: the landing page plus gallery/logo assets.
pub fn site_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .nest_service("/static", ServeDir::new("static"))
}
