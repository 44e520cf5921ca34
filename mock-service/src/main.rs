use std::net::SocketAddr;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter("mock_service=debug,tower_http=info")
        .init();

    tokio::spawn(mock_service::tps_measure_task());

    let addr: SocketAddr = ([0, 0, 0, 0], 3002).into();
    mock_service::run(addr).await
}
