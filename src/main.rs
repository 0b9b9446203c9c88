use receipt_points::{create_router, AppConfig, MemoryStore, ReceiptService};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config);
    if config.compat.legacy {
        info!("Legacy compatibility mode enabled: lenient parsing, unknown ids score 0");
    }

    // 内存存储 + 积分服务
    let store = Arc::new(MemoryStore::new());
    let service = Arc::new(ReceiptService::new(store, config.compat.legacy));

    let app = create_router(service);

    // 启动服务器
    let addr = config.addr();
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /receipts/process");
    info!("  GET  /receipts/:id/points");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
