use anyhow::{Context, Result, bail};
use futures::{SinkExt, StreamExt};
use rendezvous_core::{ClientEvent, ServerEvent};
use rendezvous_server::{AppState, router};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

/// Timeout for a single expected server event.
pub const WS_TIMEOUT: Duration = Duration::from_secs(5);

/// How long to wait before concluding nothing else is coming.
pub const QUIET_PERIOD: Duration = Duration::from_millis(300);

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Serve the full router on an ephemeral port.
pub async fn boot_server() -> Result<(SocketAddr, AppState)> {
    let state = AppState::new();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("Failed to bind test listener")?;
    let addr = listener.local_addr()?;

    let app = router(state.clone());
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("[WsClient] test server stopped: {}", e);
        }
    });

    Ok((addr, state))
}

/// Real WebSocket client talking to the relay.
pub struct WsClient {
    stream: WsStream,
}

impl WsClient {
    /// Connect and wait until the server has registered the session.
    pub async fn connect(addr: SocketAddr) -> Result<Self> {
        let (stream, _) = connect_async(format!("ws://{}/ws", addr))
            .await
            .context("WebSocket handshake failed")?;
        let mut client = Self { stream };

        client.send(&ClientEvent::GetRoomInfo).await?;
        match client.recv().await? {
            ServerEvent::UpdateRoom { .. } => Ok(client),
            other => bail!("Expected updateRoom after connecting, got {:?}", other),
        }
    }

    pub async fn send(&mut self, event: &ClientEvent) -> Result<()> {
        let json = serde_json::to_string(event)?;
        self.send_raw(Message::text(json)).await
    }

    pub async fn send_raw(&mut self, msg: Message) -> Result<()> {
        self.stream.send(msg).await.context("Failed to send frame")
    }

    /// Next server event, failing after [`WS_TIMEOUT`].
    pub async fn recv(&mut self) -> Result<ServerEvent> {
        self.recv_within(WS_TIMEOUT)
            .await?
            .context("Timeout waiting for server event")
    }

    /// Next server event, or `None` if nothing arrives within `wait`.
    pub async fn recv_within(&mut self, wait: Duration) -> Result<Option<ServerEvent>> {
        loop {
            let next = match timeout(wait, self.stream.next()).await {
                Ok(next) => next,
                Err(_) => return Ok(None),
            };

            match next {
                Some(Ok(Message::Text(text))) => {
                    let event = serde_json::from_str(text.as_str())
                        .with_context(|| format!("Undecodable server frame {:?}", text.as_str()))?;
                    return Ok(Some(event));
                }
                Some(Ok(Message::Close(_))) | None => bail!("Server closed the connection"),
                Some(Ok(_)) => continue,
                Some(Err(e)) => bail!("WebSocket error: {}", e),
            }
        }
    }

    /// Send a close frame and let the server finish the handshake.
    pub async fn close(mut self) -> Result<()> {
        self.stream.close(None).await.context("Failed to close")
    }
}
