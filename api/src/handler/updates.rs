use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use kernel::notifier::{SlotEvent, SlotEventNotifier};
use registry::AppRegistry;
use tokio::sync::broadcast;

/// Upgrades to a WebSocket and forwards every slot event as one JSON frame.
/// Subscribers joining late see only events published after they connected.
pub async fn subscribe_updates(
    ws: WebSocketUpgrade,
    State(registry): State<AppRegistry>,
) -> impl IntoResponse {
    let rx = registry.slot_event_notifier().subscribe();
    ws.on_upgrade(move |socket| stream_events(socket, rx))
}

async fn stream_events(mut socket: WebSocket, mut rx: broadcast::Receiver<SlotEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => {
                let Ok(payload) = serde_json::to_string(&event) else {
                    continue;
                };
                if socket.send(Message::Text(payload)).await.is_err() {
                    // client went away
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "subscriber lagged behind slot events");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
