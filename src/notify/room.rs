//! Notification Room
//!
//! A single process-wide group of connected sockets. Membership is
//! ephemeral: connections join on connect and leave on disconnect, and the
//! registry is never exposed for direct mutation - all access goes through
//! [`NotificationRoom::join`], [`NotificationRoom::leave`] and
//! [`NotificationRoom::broadcast`].

use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use super::messages::ServerMessage;

/// Fixed name of the one notification room
pub const NOTIFICATION_ROOM: &str = "notifications";

/// Unique identifier for a room member
pub type ConnectionId = String;

/// Configuration for the notification room
#[derive(Debug, Clone)]
pub struct RoomConfig {
    /// Maximum number of concurrent members
    pub max_connections: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            max_connections: 1000,
        }
    }
}

/// The process-wide notification room
pub struct NotificationRoom {
    /// Active members: ConnectionId → per-connection outbound channel
    members: RwLock<HashMap<ConnectionId, mpsc::UnboundedSender<ServerMessage>>>,
    config: RoomConfig,
}

impl NotificationRoom {
    /// Create the room
    pub fn new(config: RoomConfig) -> Self {
        Self {
            members: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Add a connection to the room
    ///
    /// Returns the connection ID on success, or an error if the member
    /// limit has been reached. Callers must join before acknowledging the
    /// connection as open, so a broadcast racing the connect cannot miss it.
    pub async fn join(
        &self,
        sender: mpsc::UnboundedSender<ServerMessage>,
    ) -> Result<ConnectionId, RoomError> {
        let mut members = self.members.write().await;
        if members.len() >= self.config.max_connections {
            return Err(RoomError::RoomFull(self.config.max_connections));
        }

        let id = Uuid::new_v4().to_string();
        members.insert(id.clone(), sender);

        tracing::info!(connection_id = %id, room = NOTIFICATION_ROOM, "Joined room");
        Ok(id)
    }

    /// Remove a connection from the room
    ///
    /// Idempotent: leaving twice (or leaving without having joined) is a
    /// no-op, not an error.
    pub async fn leave(&self, id: &str) {
        let removed = self.members.write().await.remove(id);
        if removed.is_some() {
            tracing::info!(connection_id = %id, room = NOTIFICATION_ROOM, "Left room");
        }
    }

    /// Publish a message to every current member
    ///
    /// Delivers to a snapshot of the membership. A failed send (member's
    /// receive half already dropped) is logged and skipped; it never aborts
    /// delivery to the remaining members or propagates to the caller.
    pub async fn broadcast(&self, message: ServerMessage) {
        let members = self.members.read().await;

        let mut sent = 0;
        for (id, sender) in members.iter() {
            if sender.send(message.clone()).is_ok() {
                sent += 1;
            } else {
                tracing::debug!(connection_id = %id, "Dropped message for closed connection");
            }
        }

        tracing::trace!(room = NOTIFICATION_ROOM, members = sent, "Broadcast message");
    }

    /// Current number of members
    pub async fn member_count(&self) -> usize {
        self.members.read().await.len()
    }
}

/// Errors that can occur in the notification room
#[derive(Debug, Error)]
pub enum RoomError {
    #[error("Room is full (limit: {0})")]
    RoomFull(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::messages::RECEIVE_NOT_SUPPORTED;
    use std::collections::HashMap as StdHashMap;

    #[tokio::test]
    async fn test_join_leave() {
        let room = NotificationRoom::new(RoomConfig::default());
        let (tx, _rx) = mpsc::unbounded_channel();

        let id = room.join(tx).await.unwrap();
        assert!(!id.is_empty());
        assert_eq!(room.member_count().await, 1);

        room.leave(&id).await;
        assert_eq!(room.member_count().await, 0);

        // Leaving again is a no-op
        room.leave(&id).await;
        assert_eq!(room.member_count().await, 0);
    }

    #[tokio::test]
    async fn test_member_limit() {
        let room = NotificationRoom::new(RoomConfig { max_connections: 1 });
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();

        room.join(tx1).await.unwrap();
        let result = room.join(tx2).await;
        assert!(matches!(result, Err(RoomError::RoomFull(1))));
    }

    #[tokio::test]
    async fn test_broadcast_reaches_all_members() {
        let room = NotificationRoom::new(RoomConfig::default());
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();

        room.join(tx1).await.unwrap();
        room.join(tx2).await.unwrap();

        room.broadcast(ServerMessage::error(RECEIVE_NOT_SUPPORTED)).await;

        assert!(rx1.try_recv().is_ok());
        assert!(rx2.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_departed_member_receives_nothing() {
        let room = NotificationRoom::new(RoomConfig::default());
        let (tx, mut rx) = mpsc::unbounded_channel();

        let id = room.join(tx).await.unwrap();
        room.leave(&id).await;

        room.broadcast(ServerMessage::notification(
            "Created new quote",
            StdHashMap::new(),
        ))
        .await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_broadcast_survives_dropped_receiver() {
        let room = NotificationRoom::new(RoomConfig::default());

        let (dead_tx, dead_rx) = mpsc::unbounded_channel();
        let (live_tx, mut live_rx) = mpsc::unbounded_channel();

        room.join(dead_tx).await.unwrap();
        room.join(live_tx).await.unwrap();
        drop(dead_rx);

        // Failed delivery to one member must not abort the rest
        room.broadcast(ServerMessage::notification(
            "Created new quote",
            StdHashMap::new(),
        ))
        .await;

        assert!(live_rx.try_recv().is_ok());
    }
}
