use std::time::Duration;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{
        header::{HeaderValue, CONTENT_TYPE},
        Method, StatusCode,
    },
    response::Html,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::gql::BlogSchema;
use crate::state::AppState;

/// Build the Axum router with the health probe and the GraphQL endpoint.
pub fn build_router(state: AppState, schema: BlogSchema) -> Router {
    let origins: Vec<HeaderValue> = state
        .config()
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    Router::new()
        // Liveness check; also proves DB connectivity.
        .route("/health", get(health))
        .route(
            "/graphql",
            post(move |req: GraphQLRequest| graphql_handler(req, schema)).get(graphiql),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE]),
        )
}

async fn graphql_handler(req: GraphQLRequest, schema: BlogSchema) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL page, only served when `GQL_PLAYGROUND=true`.
async fn graphiql(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    if !state.config().gql_playground {
        return Err(AppError::NotFound("GraphiQL is disabled".to_string()));
    }
    Ok(Html(GraphiQLSource::build().endpoint("/graphql").finish()))
}

async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&state.db).await?;
    Ok("ok")
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;
    use crate::gql::build_schema;

    fn router(config: AppConfig) -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .expect("valid database url");
        let state = AppState::new(pool, config);
        let schema = build_schema(state.clone());
        build_router(state, schema)
    }

    #[tokio::test]
    async fn test_graphiql_disabled_by_default() {
        let app = router(AppConfig::default());

        let response = app
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_graphiql_served_when_enabled() {
        let app = router(AppConfig {
            gql_playground: true,
            ..AppConfig::default()
        });

        let response = app
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_graphql_post_without_db_for_null_mutation() {
        let app = router(AppConfig::default());

        let body = serde_json::json!({ "query": "mutation { crearAutor { aut_id } }" });
        let response = app
            .oneshot(
                Request::post("/graphql")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["data"]["crearAutor"].is_null());
        assert!(json.get("errors").is_none());
    }
}
