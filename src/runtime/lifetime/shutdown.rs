use tokio::signal;
use tracing::warn;

/// 等待 Ctrl+C，收到后返回以触发优雅退出
pub async fn listen_for_shutdown() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    warn!("Shutdown signal received, closing portal...");
}
