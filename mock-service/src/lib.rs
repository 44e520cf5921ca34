use axum::{
    debug_handler,
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::get,
    Router,
};
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::debug;

pub fn router() -> Router {
    Router::new()
        .route("/bytes/:len", get(bytes))
        .route("/ok/:suffix", get(ok))
        .route("/status/:code/:body", get(status))
        .route("/delay/ms/:delay_ms", get(delay))
        .route("/header/:name", get(header))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(addr: SocketAddr) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router()).await
}

/// Serve on an ephemeral localhost port in the background, returning the bound address.
pub async fn spawn() -> io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router()).await {
            tracing::error!("Mock service stopped: {err}");
        }
    });
    debug!("Mock service listening on {addr}");
    Ok(addr)
}

/// `len` bytes of text, compressed when the client accepts it.
#[debug_handler]
pub async fn bytes(Path(len): Path<usize>) -> String {
    TPS_MEASURE.fetch_add(1, Ordering::Relaxed);
    "x".repeat(len)
}

#[debug_handler]
pub async fn ok(Path(suffix): Path<String>) -> String {
    TPS_MEASURE.fetch_add(1, Ordering::Relaxed);
    format!("ok {suffix}")
}

#[debug_handler]
pub async fn status(Path((code, body)): Path<(u16, String)>) -> (StatusCode, String) {
    TPS_MEASURE.fetch_add(1, Ordering::Relaxed);
    let code = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST);
    (code, body)
}

#[debug_handler]
pub async fn delay(Path(delay_ms): Path<u64>) {
    TPS_MEASURE.fetch_add(1, Ordering::Relaxed);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
}

/// Echoes a request header back, or 404 if the client did not send it.
#[debug_handler]
pub async fn header(Path(name): Path<String>, headers: HeaderMap) -> Result<String, StatusCode> {
    TPS_MEASURE.fetch_add(1, Ordering::Relaxed);
    headers
        .get(name.as_str())
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or(StatusCode::NOT_FOUND)
}

/** TPS Printer **/

static TPS_MEASURE: AtomicU64 = AtomicU64::new(0);

pub async fn tps_measure_task() {
    loop {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let transactions = TPS_MEASURE.swap(0, Ordering::Relaxed);
        println!("{transactions} TPS");
    }
}
