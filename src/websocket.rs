use axum::{
    extract::ws::{Message, WebSocket},
    extract::{State, WebSocketUpgrade},
    response::IntoResponse,
};
use futures_util::StreamExt;
use tokio::sync::broadcast::error::RecvError;

use crate::state::SharedState;

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<SharedState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Push the current appstate snapshot, then forward every update until the
/// client goes away. Incoming messages are drained and ignored.
pub async fn handle_socket(mut socket: WebSocket, state: SharedState) {
    let snapshot = state.round.read().await.to_appstate().to_string();
    if socket.send(Message::Text(snapshot.into())).await.is_err() {
        return;
    }

    let mut updates = state.updates.subscribe();
    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Ok(snapshot) => {
                    if socket.send(Message::Text(snapshot.into())).await.is_err() {
                        break;
                    }
                }
                // A lagged client catches up on the next snapshot
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            },
            incoming = socket.next() => match incoming {
                Some(Ok(_)) => {}
                _ => break,
            },
        }
    }
}
