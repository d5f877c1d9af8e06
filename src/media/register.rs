use crate::errors::Result;
use crate::media::MediaUploader;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedMediaUploaderFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn MediaUploader>>> + Send>>;
pub type MediaUploaderConstructor = Arc<dyn Fn() -> BoxedMediaUploaderFuture + Send + Sync>;

static MEDIA_UPLOADER_REGISTRY: Lazy<RwLock<HashMap<String, MediaUploaderConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_media_uploader_plugin<S: Into<String>>(
    name: S,
    constructor: MediaUploaderConstructor,
) {
    let name = name.into();
    let mut registry = MEDIA_UPLOADER_REGISTRY
        .write()
        .expect("Media uploader registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_media_uploader_plugin(name: &str) -> Option<MediaUploaderConstructor> {
    MEDIA_UPLOADER_REGISTRY
        .read()
        .expect("Media uploader registry lock poisoned")
        .get(name)
        .cloned()
}

pub fn debug_media_uploader_registry() {
    let registry = MEDIA_UPLOADER_REGISTRY
        .read()
        .expect("Media uploader registry lock poisoned");
    if registry.is_empty() {
        tracing::debug!("No media uploader plugins registered.");
    } else {
        tracing::debug!("Registered media uploader plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_backends_are_registered() {
        assert!(get_media_uploader_plugin("local").is_some());
        assert!(get_media_uploader_plugin("cloudinary").is_some());
        assert!(get_media_uploader_plugin("s3").is_none());
    }
}
