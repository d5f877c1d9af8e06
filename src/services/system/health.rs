use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::models::{ApiResponse, AppStartTime, ErrorCode, system::responses::HealthResponse};
use crate::services::common::{storage_from_request, uploader_from_request};

pub async fn health(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let storage = storage_from_request(request);

    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or_default();

    let media_backend = uploader_from_request(request)
        .map(|uploader| uploader.backend_name().to_string())
        .unwrap_or_else(|| "none".to_string());

    let ping = storage.ping().await;
    let response = HealthResponse {
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        database: if ping.is_ok() {
            storage.backend_name().to_string()
        } else {
            "unavailable".to_string()
        },
        media_backend,
        uptime_seconds,
    };

    match ping {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Service is healthy"))),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Ok(HttpResponse::ServiceUnavailable().json(ApiResponse::error(
                ErrorCode::ServiceUnavailable,
                response,
                "Database is unavailable",
            )))
        }
    }
}
