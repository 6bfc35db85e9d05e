//! `ScrawlServer` builder and accept loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use scrawl_protocol::JsonCodec;
use scrawl_transport::{Transport, WebSocketTransport};

use crate::ScrawlError;
use crate::handler::handle_connection;
use crate::router::GameState;

/// How long the revealed word stays on screen before the next round
/// begins. A deliberate UX pause, not a retry interval.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_secs(2);

/// Shared server state passed to each connection handler task.
pub(crate) struct ServerState {
    /// All rooms and the broadcast hub, behind one lock: every handler
    /// runs to completion against it, which is what makes handler
    /// read-modify-write sequences atomic.
    pub(crate) game: Mutex<GameState>,
    pub(crate) codec: JsonCodec,
    pub(crate) reveal_delay: Duration,
}

/// Builder for configuring and starting a Scrawl server.
///
/// # Example
///
/// ```rust,no_run
/// use scrawl::ScrawlServerBuilder;
///
/// # async fn run() -> Result<(), scrawl::ScrawlError> {
/// let server = ScrawlServerBuilder::new()
///     .bind("0.0.0.0:4000")
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct ScrawlServerBuilder {
    bind_addr: String,
    reveal_delay: Duration,
}

impl ScrawlServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:4000".to_string(),
            reveal_delay: DEFAULT_REVEAL_DELAY,
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Overrides the pause between a correct guess and the next round.
    pub fn reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Binds the transport and builds the server.
    pub async fn build(self) -> Result<ScrawlServer, ScrawlError> {
        let transport = WebSocketTransport::bind(&self.bind_addr).await?;

        let state = Arc::new(ServerState {
            game: Mutex::new(GameState::new()),
            codec: JsonCodec,
            reveal_delay: self.reveal_delay,
        });

        Ok(ScrawlServer { transport, state })
    }
}

impl Default for ScrawlServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running Scrawl game server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct ScrawlServer {
    transport: WebSocketTransport,
    state: Arc<ServerState>,
}

impl ScrawlServer {
    /// Creates a new builder.
    pub fn builder() -> ScrawlServerBuilder {
        ScrawlServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the accept loop, spawning a handler task per connection.
    /// Runs until the process is terminated.
    pub async fn run(mut self) -> Result<(), ScrawlError> {
        tracing::info!("Scrawl server running");

        loop {
            match self.transport.accept().await {
                Ok(conn) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(handle_connection(conn, state));
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
