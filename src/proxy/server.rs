use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::proxy::error::ProxyError;
use crate::proxy::router::{build_router, RouterEngine};
use crate::proxy::shutdown::ShutdownManager;
use crate::proxy::upstream::UpstreamClient;

pub struct ProxyServer {
    pub addr: SocketAddr,
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    bind_addr: String,
    router: RouterEngine,
    shutdown: Arc<ShutdownManager>,
}

impl ProxyServer {
    pub fn new(config: &Config) -> Result<Self, ProxyError> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        Ok(Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)), // Will be determined at bind time
            listener: None,
            bind_addr: config.proxy.bind_addr.clone(),
            router: RouterEngine::new(upstream),
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    /// Bind the configured address and keep the listener until run().
    ///
    /// Port 0 picks a free port; the returned address is the real one.
    pub async fn try_bind(&mut self) -> Result<SocketAddr, ProxyError> {
        let listener = TcpListener::bind(&self.bind_addr)
            .await
            .map_err(|e| ProxyError::Bind {
                addr: self.bind_addr.clone(),
                source: e,
            })?;
        let actual_addr = listener.local_addr()?;

        self.addr = actual_addr;
        self.listener = Some(listener);
        tracing::info!("Catalog proxy bound to {}", actual_addr);
        Ok(actual_addr)
    }

    pub fn handle(&self) -> ProxyHandle {
        ProxyHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Run until shutdown is signalled.
    ///
    /// Call try_bind() first.
    pub async fn run(self) -> Result<(), ProxyError> {
        let listener = self
            .listener
            .ok_or_else(|| ProxyError::Internal("try_bind() must be called before run()".into()))?;

        tracing::info!("Starting catalog proxy on {}", self.addr);

        let app = build_router(self.router.clone());
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.wait_for_shutdown().await })
            .into_future()
            .await?;

        tracing::info!("Catalog proxy stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ProxyHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ProxyHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
