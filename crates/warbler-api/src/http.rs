//! HTTP surface: axum router and server loop

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tracing::Instrument;
use warbler_core_types::RequestId;

use crate::config::ApiConfig;
use crate::schema::{build_schema, WarblerSchema};
use crate::state::AppState;
use warbler_store::errors::{io_error, Result};

/// Build the router for the GraphQL API
pub fn router(schema: WarblerSchema) -> Router {
    Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphiql", get(graphiql))
        .route("/healthz", get(healthz))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(schema)
}

/// Open the database, build the schema, and serve until shutdown
pub async fn serve(config: ApiConfig) -> Result<()> {
    let state = AppState::init(&config)?;
    let schema = build_schema(state);
    let app = router(schema);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .map_err(|e| io_error("bind", e))?;
    tracing::info!(addr = %config.addr, db = %config.db_path, "warbler api listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| io_error("serve", e))?;

    Ok(())
}

async fn graphql_handler(
    State(schema): State<WarblerSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn healthz() -> &'static str {
    "ok"
}

/// Assign a request id, carry it through a tracing span, and echo it back
async fn request_id_middleware(req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| RequestId::from_string(s.to_string()))
        .unwrap_or_default();

    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
