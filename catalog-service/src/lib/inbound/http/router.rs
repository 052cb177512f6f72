use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_book::create_book;
use super::handlers::create_seller::create_seller;
use super::handlers::delete_book::delete_book;
use super::handlers::delete_seller::delete_seller;
use super::handlers::get_book::get_book;
use super::handlers::get_seller::get_seller;
use super::handlers::issue_token::issue_token;
use super::handlers::list_books::list_books;
use super::handlers::list_sellers::list_sellers;
use super::handlers::update_book::update_book;
use super::handlers::update_seller::update_seller;
use super::middleware::require_principal;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::book::ports::BookServicePort;
use crate::domain::seller::ports::SellerServicePort;

#[derive(Clone)]
pub struct AppState {
    pub seller_service: Arc<dyn SellerServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
}

pub fn create_router(
    seller_service: Arc<dyn SellerServicePort>,
    book_service: Arc<dyn BookServicePort>,
    auth_service: Arc<dyn AuthServicePort>,
) -> Router {
    let state = AppState {
        seller_service,
        book_service,
        auth_service,
    };

    let public_routes = Router::new()
        .route("/api/token", post(issue_token))
        .route("/api/sellers", post(create_seller).get(list_sellers))
        .route("/api/books", get(list_books))
        .route("/api/books/:book_id", get(get_book));

    let protected_routes = Router::new()
        .route(
            "/api/sellers/:seller_id",
            get(get_seller).put(update_seller).delete(delete_seller),
        )
        .route("/api/books", post(create_book))
        .route("/api/books/:book_id", put(update_book).delete(delete_book))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_principal,
        ));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
