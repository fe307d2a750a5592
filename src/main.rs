use axum::{extract::RawQuery, response::{IntoResponse, Response}, routing::get, Extension, Router};
use grid_core::{respond, ConfigError, Reply, UpstreamClient, UpstreamConfig};
use tower_http::cors::{CorsLayer, Any};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};


type GenericError = Box<dyn std::error::Error + Send + Sync + 'static>;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";


#[tokio::main]
async fn main() -> Result<(), GenericError> {
    init_logger();

    let config = UpstreamConfig::from_env()?;
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let client = UpstreamClient::new(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ConfigError::Bind { addr: addr.clone(), source })?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(client)).await?;

    Ok(())
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("grid_core=info,grid_snapshot=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn router(client: UpstreamClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/get_data", get(get_data))
        .route("/.netlify/functions/get_data", get(get_data))
        .layer(cors)
        .layer(Extension(client))
}


pub struct ApiReply(pub Reply);

impl IntoResponse for ApiReply {
    fn into_response(self) -> Response {
        (self.0.status, Reply::headers(), self.0.body_string()).into_response()
    }
}

/// First `region` value in the query string; repeated keys never reject the request.
fn region_param(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "region")
        .map(|(_, value)| value.into_owned())
}

async fn get_data(
    Extension(client): Extension<UpstreamClient>,
    RawQuery(query): RawQuery,
) -> ApiReply {
    let region = region_param(query.as_deref());
    ApiReply(respond(&client, region.as_deref()).await)
}
