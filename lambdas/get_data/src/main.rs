use lambda_http::{run, service_fn, tracing};
use lambda_http::{Body, Error, Request, RequestExt, Response};
use grid_core::{respond, Reply, UpstreamClient, UpstreamConfig};

async fn function_handler(client: &UpstreamClient, event: Request) -> Result<Response<Body>, Error> {
    // a missing queryStringParameters map comes through as an empty one
    let params = event.query_string_parameters();
    let reply = respond(client, params.first("region")).await;

    let mut res = Response::builder().status(reply.status);
    for (name, value) in Reply::headers() {
        res = res.header(name, value);
    }

    Ok(res.body(reply.body_string().into())?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let client = UpstreamClient::new(UpstreamConfig::from_env()?);
    let client = &client;

    run(service_fn(move |event: Request| async move {
        function_handler(client, event).await
    })).await
}
