use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::attendance::requests::{
    AttendanceQueryParams, CreateAttendanceRequest, UpdateAttendanceRequest,
};
use crate::services::AttendanceService;
use crate::utils::SafeAttendanceIdI64;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn list_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceQueryParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.list_attendance(&req, query.into_inner()).await
}

pub async fn create_attendance(
    req: HttpRequest,
    data: web::Json<CreateAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.create_attendance(&req, data.into_inner()).await
}

pub async fn get_attendance(
    req: HttpRequest,
    attendance_id: SafeAttendanceIdI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.get_attendance(&req, attendance_id.0).await
}

pub async fn update_attendance(
    req: HttpRequest,
    attendance_id: SafeAttendanceIdI64,
    data: web::Json<UpdateAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_attendance(&req, attendance_id.0, data.into_inner())
        .await
}

pub async fn delete_attendance(
    req: HttpRequest,
    attendance_id: SafeAttendanceIdI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.delete_attendance(&req, attendance_id.0).await
}

// 配置考勤路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .service(
                web::resource("")
                    .route(web::get().to(list_attendance))
                    .route(web::post().to(create_attendance)),
            )
            .service(
                web::resource("/{attendance_id}")
                    .route(web::get().to(get_attendance))
                    .route(web::put().to(update_attendance))
                    .route(web::delete().to(delete_attendance)),
            ),
    );
}
