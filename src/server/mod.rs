pub mod context;
pub mod cors;
pub mod error;
pub mod response;

use std::convert::Infallible;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn};

use crate::router;
use crate::utils::error::Result;
use context::AppContext;

/// Pause after a failed accept. Most accept errors (EMFILE, ENFILE, ENOBUFS)
/// clear once other connections close; spinning on them only burns CPU.
pub const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Source of inbound connections for [`run`].
pub trait Acceptor: Send + Sync {
    fn accept(&self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send;
    fn local_addr(&self) -> io::Result<SocketAddr>;
}

impl Acceptor for TcpListener {
    async fn accept(&self) -> io::Result<(TcpStream, SocketAddr)> {
        TcpListener::accept(self).await
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        TcpListener::local_addr(self)
    }
}

/// Accepts connections forever, serving each one on its own task. Failed
/// accepts are logged and retried after [`ACCEPT_BACKOFF`].
pub async fn run<A: Acceptor>(listener: A, ctx: Arc<AppContext>) -> Result<()> {
    info!("Now listening at http://{}", listener.local_addr()?);

    loop {
        let (stream, remote_addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(err) => {
                error!("Failed to accept connection: {}", err);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        let io = TokioIo::new(stream);
        let ctx = ctx.clone();

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let ctx = ctx.clone();
                async move { Ok::<_, Infallible>(router::serve(req, ctx).await) }
            });

            if let Err(err) = http1::Builder::new()
                .serve_connection(io, service)
                .await
            {
                warn!("Error serving connection from {}: {}", remote_addr, err);
            }
        });
    }
}
