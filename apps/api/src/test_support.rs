//! Helpers shared by unit tests that need a stand-in completion API.

use axum::Router;

/// Serves `router` on an ephemeral localhost port and returns its base URL.
/// The server task lives until the test runtime shuts down.
pub async fn spawn_mock_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
