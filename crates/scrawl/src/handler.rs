//! Per-connection handler: decode, route, clean up.
//!
//! Each accepted connection gets its own task running
//! [`handle_connection`], plus a writer task that pumps the connection's
//! outbound channel onto the socket. The handler owns the connection's
//! whole lifecycle: register with the hub, loop over inbound events, and
//! on any exit run the disconnect path so no room keeps a ghost player.

use std::sync::Arc;

use tokio::sync::mpsc;

use scrawl_protocol::{ClientEvent, Codec, RoomCode};
use scrawl_transport::{Connection, WebSocketConnection};

use crate::router::FollowUp;
use crate::server::ServerState;

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection(
    conn: WebSocketConnection,
    state: Arc<ServerState>,
) {
    let conn_id = conn.id();
    tracing::debug!(%conn_id, "handling new connection");

    let conn = Arc::new(conn);
    let (tx, mut rx) = mpsc::unbounded_channel();
    state.game.lock().await.connect(conn_id, tx);

    // Writer task: everything the hub addresses to this connection goes
    // out here, in channel order. Ends when the hub drops the sender.
    let writer = {
        let conn = Arc::clone(&conn);
        let codec = state.codec;
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                let bytes = match codec.encode(&event) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to encode outbound event");
                        continue;
                    }
                };
                if conn.send(&bytes).await.is_err() {
                    break;
                }
            }
        })
    };

    loop {
        let data = match conn.recv().await {
            Ok(Some(data)) => data,
            Ok(None) => {
                tracing::info!(%conn_id, "connection closed cleanly");
                break;
            }
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "recv error");
                break;
            }
        };

        let event: ClientEvent = match state.codec.decode(&data) {
            Ok(event) => event,
            Err(e) => {
                // Malformed input never kills the connection, let alone
                // the process.
                tracing::debug!(%conn_id, error = %e, "undecodable event, skipping");
                continue;
            }
        };

        let follow_up = state.game.lock().await.route(conn_id, event);
        if let FollowUp::ScheduleRound(code) = follow_up {
            schedule_round(Arc::clone(&state), code);
        }
    }

    state.game.lock().await.connection_closed(conn_id);
    let _ = writer.await;
}

/// Schedules the deferred round start that follows a correct guess.
///
/// The pause is purely for the reveal to stay on screen. Nothing is
/// cancelled if the room changes underneath — the timer re-resolves the
/// room by code when it fires and no-ops if it is gone.
pub(crate) fn schedule_round(state: Arc<ServerState>, code: RoomCode) {
    tokio::spawn(async move {
        tokio::time::sleep(state.reveal_delay).await;
        state.game.lock().await.advance_round(&code);
    });
}
