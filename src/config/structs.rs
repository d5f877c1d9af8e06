use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub upload: UploadConfig,
    pub media: MediaConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,       // 数据库连接 URL（为空时由 DB_* 环境变量拼接）
    pub pool_size: u32,    // 连接池大小
    pub timeout: u64,      // 连接超时 (秒)
    pub idle_timeout: u64, // 空闲连接回收时间 (秒)
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub dir: String,                // 本地上传目录
    pub max_size: usize,            // 单文件最大字节数
    pub allowed_types: Vec<String>, // 允许的扩展名
}

/// 媒体存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    pub provider: String,        // cloudinary / local
    pub public_base_url: String, // local 后端对外访问前缀
    pub timeout: u64,            // 上传请求超时 (秒)
    pub cloudinary: CloudinaryConfig,
}

/// Cloudinary 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudinaryConfig {
    pub api_base: String, // 上传 API 地址
    pub cloud_name: String,
    #[serde(skip_serializing, default)]
    pub api_key: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub api_secret: String,
    pub folder: String,
}
