use crate::config::AppConfig;
use crate::media::MediaUploader;
use crate::media::register::get_media_uploader_plugin;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub uploader: Arc<dyn MediaUploader>,
}

/// 按名称从注册表构造上传后端
async fn build_uploader(name: &str) -> Result<Arc<dyn MediaUploader>, String> {
    let constructor = get_media_uploader_plugin(name)
        .ok_or_else(|| format!("Media backend '{name}' not found in registry"))?;

    constructor()
        .await
        .map(Arc::from)
        .map_err(|e| format!("Failed to create {name} media backend: {e}"))
}

/// 创建媒体上传实例
///
/// 配置的后端不可用时回退到 local，保证上传接口仍然可用。
async fn create_uploader() -> Result<Arc<dyn MediaUploader>, String> {
    let provider = &AppConfig::get().media.provider;

    warn!("Attempting to create {} media backend", provider);

    match build_uploader(provider).await {
        Ok(uploader) => {
            warn!("Successfully created {} media backend", provider);
            Ok(uploader)
        }
        Err(e) if provider != "local" => {
            warn!("{}", e);
            warn!("Falling back to local media backend");
            build_uploader("local").await
        }
        Err(e) => Err(e),
    }
}

/// 准备服务器启动的上下文
/// 包括存储与媒体上传后端
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    if cfg!(debug_assertions) {
        crate::media::register::debug_media_uploader_registry();
        debug!("Debug mode: Media uploader registry is enabled");
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let uploader = create_uploader()
        .await
        .expect("Failed to create media uploader");
    warn!("Media backend '{}' initialized", uploader.backend_name());

    StartupContext { storage, uploader }
}
