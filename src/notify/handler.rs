//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and ties each connection's lifecycle
//! to room membership: join before the first read, leave on every exit
//! path.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::messages::{ServerMessage, RECEIVE_NOT_SUPPORTED};
use super::room::NotificationRoom;
use crate::api::AppState;

/// WebSocket upgrade handler for the notification room
pub async fn notifications_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let room = Arc::clone(&state.room);
    ws.on_upgrade(move |socket| handle_socket(socket, room))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, room: Arc<NotificationRoom>) {
    let (mut sender, mut receiver) = socket.split();

    // Channel carrying room messages to this connection
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    // Join before reading anything from the socket: a broadcast racing the
    // connect must find this member already registered.
    let connection_id = match room.join(tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected WebSocket connection");
            let error_msg = ServerMessage::error(e.to_string());
            if let Ok(text) = serde_json::to_string(&error_msg) {
                let _ = sender.send(Message::Text(text)).await;
            }
            return;
        }
    };

    let conn_id_for_send = connection_id.clone();

    // Task to forward room messages to the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(text) => {
                    if sender.send(Message::Text(text)).await.is_err() {
                        tracing::debug!(
                            connection_id = %conn_id_for_send,
                            "WebSocket send failed, closing connection"
                        );
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize message");
                }
            }
        }
    });

    let room_for_recv = Arc::clone(&room);
    let conn_id_for_recv = connection_id.clone();

    // Task to drain inbound frames; clients may not send into this room
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !handle_inbound(&room_for_recv, &conn_id_for_recv, msg).await {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %conn_id_for_recv,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            }
        }
    });

    // Wait for either task to complete
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    // Cleanup: leave the room on every disconnect path
    room.leave(&connection_id).await;
}

/// Handle one inbound frame
///
/// Any client payload is rejected with a room-wide error broadcast (the
/// sender receives it too). Returns false when the connection should close.
async fn handle_inbound(room: &Arc<NotificationRoom>, connection_id: &str, message: Message) -> bool {
    match message {
        Message::Text(_) | Message::Binary(_) => {
            tracing::debug!(connection_id = %connection_id, "Rejected inbound payload");
            room.broadcast(ServerMessage::error(RECEIVE_NOT_SUPPORTED)).await;
            true
        }
        // Axum answers pings automatically
        Message::Ping(_) | Message::Pong(_) => true,
        Message::Close(_) => {
            tracing::debug!(connection_id = %connection_id, "Client requested close");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::room::RoomConfig;

    #[tokio::test]
    async fn test_inbound_payload_broadcasts_error_to_all() {
        let room = Arc::new(NotificationRoom::new(RoomConfig::default()));

        let (offender_tx, mut offender_rx) = mpsc::unbounded_channel();
        let (bystander_tx, mut bystander_rx) = mpsc::unbounded_channel();
        let offender = room.join(offender_tx).await.unwrap();
        room.join(bystander_tx).await.unwrap();

        let keep_open =
            handle_inbound(&room, &offender, Message::Text("hello".to_string())).await;
        assert!(keep_open);

        // Room-wide: sender included
        for rx in [&mut offender_rx, &mut bystander_rx] {
            let msg = rx.try_recv().unwrap();
            match msg {
                ServerMessage::Error { reason } => assert_eq!(reason, RECEIVE_NOT_SUPPORTED),
                other => panic!("Expected Error, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_binary_payload_also_rejected() {
        let room = Arc::new(NotificationRoom::new(RoomConfig::default()));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let id = room.join(tx).await.unwrap();

        handle_inbound(&room, &id, Message::Binary(vec![1, 2, 3])).await;

        assert!(matches!(rx.try_recv(), Ok(ServerMessage::Error { .. })));
    }

    #[tokio::test]
    async fn test_close_frame_ends_loop() {
        let room = Arc::new(NotificationRoom::new(RoomConfig::default()));
        let (tx, _rx) = mpsc::unbounded_channel();
        let id = room.join(tx).await.unwrap();

        let keep_open = handle_inbound(&room, &id, Message::Close(None)).await;
        assert!(!keep_open);
    }
}
