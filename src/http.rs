//! The HTTP server, handler and routes.
//!
//! There is very little logic here: the GraphQL endpoint is delegated to
//! `juniper_hyper`, which parses the request (POST body or GET query
//! parameters), executes the document against our root node and serializes
//! the standard `data`/`errors` response envelope.

use std::{convert::Infallible, net::{IpAddr, SocketAddr}, sync::Arc};
use hyper::{
    Method, Request, Response, StatusCode,
    body::Incoming,
    server::conn::http1,
    service::service_fn,
};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::{api, prelude::*};


/// HTTP server configuration.
#[derive(Debug, Clone, confique::Config)]
pub(crate) struct HttpConfig {
    /// The TCP port the HTTP server should listen on.
    #[config(default = 3007)]
    pub(crate) port: u16,

    /// The bind address to listen on.
    #[config(default = "127.0.0.1")]
    pub(crate) address: IpAddr,
}

/// Starts the HTTP server and runs it until the process receives Ctrl-C.
pub(crate) async fn serve(
    config: &HttpConfig,
    root_node: api::RootNode,
    context: api::Context,
) -> Result<()> {
    let root_node = Arc::new(root_node);
    let context = Arc::new(context);

    let addr = SocketAddr::new(config.address, config.port);
    let listener = TcpListener::bind(addr).await
        .context(format!("failed to bind to {addr}"))?;
    info!("Listening on http://{}", addr);

    loop {
        let (stream, _) = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received SIGINT: shutting down");
                return Ok(());
            }
            connection = listener.accept() => match connection {
                Ok(connection) => connection,
                Err(e) => {
                    warn!("Failed to accept TCP connection: {e}");
                    continue;
                }
            },
        };

        let root_node = Arc::clone(&root_node);
        let context = Arc::clone(&context);
        tokio::spawn(async move {
            let service = service_fn(move |req| {
                let root_node = Arc::clone(&root_node);
                let context = Arc::clone(&context);
                async move { Ok::<_, Infallible>(handle(req, root_node, context).await) }
            });

            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                // Clients hanging up mid-request end up here, so this is not
                // worth a warning.
                debug!("Error serving HTTP connection: {e}");
            }
        });
    }
}

/// This is the main entry point, called for each incoming request.
async fn handle(
    req: Request<Incoming>,
    root_node: Arc<api::RootNode>,
    context: Arc<api::Context>,
) -> Response<String> {
    trace!(
        "Incoming HTTP {:?} request to '{}{}'",
        req.method(),
        req.uri().path(),
        req.uri().query().map(|q| format!("?{}", q)).unwrap_or_default(),
    );

    match (req.method(), req.uri().path()) {
        // The actual GraphQL API.
        (&Method::GET, "/graphql") | (&Method::POST, "/graphql") => {
            juniper_hyper::graphql(root_node, context, req).await
        }

        // The interactive GraphQL API explorer/IDE. It does not expose any
        // information that isn't already exposed by the API itself.
        (&Method::GET, "/graphiql") => juniper_hyper::graphiql("/graphql", None).await,

        // 404 for everything else.
        (method, path) => {
            debug!("Responding with 404 to {:?} {}", method, path);
            let mut response = Response::new("404 Not Found".into());
            *response.status_mut() = StatusCode::NOT_FOUND;
            response
        }
    }
}
