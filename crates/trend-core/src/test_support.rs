//! Helpers shared by the HTTP client unit tests.

use axum::Router;

/// Serve `app` on an ephemeral local port and return its `http://host:port` base.
pub(crate) async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
