use serde::Serialize;
use ts_rs::TS;

// 健康检查响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "system.ts")]
pub struct HealthResponse {
    pub system_name: String,
    pub version: String,
    pub environment: String,
    pub database: String,
    pub media_backend: String,
    pub uptime_seconds: i64,
}
