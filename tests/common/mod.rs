#![allow(dead_code)]

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web,
};
use std::sync::Arc;
use tempfile::TempDir;

use rust_schoolsys::config::DatabaseConfig;
use rust_schoolsys::media::MediaUploader;
use rust_schoolsys::media::local::LocalUploader;
use rust_schoolsys::models::AppStartTime;
use rust_schoolsys::routes;
use rust_schoolsys::storage::Storage;
use rust_schoolsys::storage::sea_orm_storage::SeaOrmStorage;
use rust_schoolsys::utils::{json_error_handler, query_error_handler};

pub const PUBLIC_BASE: &str = "http://localhost:3000";

/// 最小合法 PNG 头
pub const PNG_BYTES: [u8; 16] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52,
];

pub struct TestState {
    pub storage: Arc<dyn Storage>,
    pub uploader: Arc<dyn MediaUploader>,
    // 保持临时目录存活
    pub upload_dir: TempDir,
}

pub async fn setup() -> TestState {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
        idle_timeout: 30,
    };
    let storage = SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory database");
    let upload_dir = tempfile::tempdir().expect("temp dir");
    let uploader = LocalUploader::new(upload_dir.path(), PUBLIC_BASE);

    TestState {
        storage: Arc::new(storage),
        uploader: Arc::new(uploader),
        upload_dir,
    }
}

/// 组装完整应用；返回类型不捕获 `state` 的借用，便于 `init_service`
pub fn app(
    state: &TestState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody + use<>>,
        Error = Error,
        InitError = (),
    > + use<>,
> {
    let storage = state.storage.clone();
    let uploader = state.uploader.clone();

    App::new()
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::Data::new(storage))
        .app_data(web::Data::new(uploader))
        .app_data(web::Data::new(AppStartTime {
            start_datetime: chrono::Utc::now(),
        }))
        .configure(routes::configure_system_routes)
        .configure(routes::configure_students_routes)
        .configure(routes::configure_classes_routes)
        .configure(routes::configure_fee_types_routes)
        .configure(routes::configure_fees_routes)
        .configure(routes::configure_teachers_routes)
        .configure(routes::configure_subjects_routes)
        .configure(routes::configure_attendance_routes)
        .configure(routes::configure_pictures_routes)
        .configure(routes::configure_file_routes)
}

const BOUNDARY: &str = "----schoolsys-test-boundary";

/// 构造 multipart 请求体，返回 (Content-Type, body)
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> (String, Vec<u8>) {
    match file {
        Some(file) => multipart_files(fields, &[file]),
        None => multipart_files(fields, &[]),
    }
}

/// 同 [`multipart_body`]，允许多个文件字段
pub fn multipart_files(
    fields: &[(&str, &str)],
    files: &[(&str, &str, &[u8])],
) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (name, file_name, data) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}
