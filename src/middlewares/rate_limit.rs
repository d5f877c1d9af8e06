/*!
 * 速率限制中间件
 *
 * 固定窗口计数，用于限制上传类端点的请求频率，避免媒体后端被刷。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::RateLimit;
 *
 * App::new()
 *     .service(
 *         web::resource("/api/v1/pictures")
 *             .route(web::post().to(create_picture).wrap(RateLimit::media_upload()))
 *     )
 * ```
 *
 * ## 限制规则
 *
 * - 使用客户端 IP 作为限制键
 * - 计数按窗口编号分桶，窗口切换后自动归零
 * - 超过限制返回 429 Too Many Requests
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

/// 全局速率限制缓存
/// 键: 路由前缀:ip:窗口编号，值: 请求计数
static RATE_LIMIT_CACHE: Lazy<Cache<String, u32>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(MAX_WINDOW_SECS))
        .max_capacity(100_000)
        .build()
});

/// 窗口上限，同时作为缓存过期时间
const MAX_WINDOW_SECS: u64 = 3600;

/// 速率限制配置
#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u32,
    /// 时间窗口（秒）
    window_secs: u64,
    /// 限制键前缀（用于区分不同端点）
    key_prefix: String,
}

impl RateLimit {
    /// 创建新的速率限制器
    ///
    /// # 参数
    /// - `max_requests`: 时间窗口内允许的最大请求数
    /// - `window_secs`: 时间窗口（秒）
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs: window_secs.clamp(1, MAX_WINDOW_SECS),
            key_prefix: String::new(),
        }
    }

    /// 设置限制键前缀
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 媒体上传端点限制：10次/分钟/IP
    pub fn media_upload() -> Self {
        Self::new(10, 60).with_prefix("upload")
    }
}

/// 从请求中提取客户端 IP
///
/// 安全注意事项：
/// - 如果服务部署在反向代理后面，需要在反向代理中配置正确的 X-Forwarded-For / X-Real-IP 头
/// - 此实现会验证 IP 格式，防止伪造的无效头导致问题
/// - 在不可信网络中直接暴露服务时，攻击者可能伪造转发头来绕过限制
fn extract_client_ip(req: &ServiceRequest) -> String {
    // 尝试从连接信息获取真实 IP（最可信）
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    // 如果连接信息有有效 IP，优先使用
    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    // 从 X-Forwarded-For 头获取（用于反向代理场景）
    // 只取第一个 IP（最接近客户端的）
    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    // 从 X-Real-IP 头获取
    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    // 如果都没有有效 IP，使用连接信息的默认值
    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

/// 验证 IP 地址格式是否有效
fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

/// 当前时间所在窗口编号及距窗口结束的秒数
fn current_window(window_secs: u64) -> (u64, u64) {
    let now = chrono::Utc::now().timestamp().max(0) as u64;
    (now / window_secs, window_secs - now % window_secs)
}

/// 创建速率限制错误响应
fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            max_requests: self.max_requests,
            window_secs: self.window_secs,
            key_prefix: self.key_prefix.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let max_requests = self.max_requests;
        let window_secs = self.window_secs;
        let key_prefix = self.key_prefix.clone();

        Box::pin(async move {
            let (window, reset_after) = current_window(window_secs);

            // 构建限制键
            let identifier = format!("ip:{}", extract_client_ip(&req));
            let cache_key = if key_prefix.is_empty() {
                format!("{identifier}:{window}")
            } else {
                format!("{key_prefix}:{identifier}:{window}")
            };

            // 获取当前计数
            let current_count = RATE_LIMIT_CACHE.get(&cache_key).await.unwrap_or(0);

            // 检查是否超过限制
            if current_count >= max_requests {
                warn!(
                    "Rate limit exceeded for key: {} (count: {}/{})",
                    cache_key, current_count, max_requests
                );
                return Ok(req.into_response(
                    create_rate_limit_response(reset_after).map_into_right_body(),
                ));
            }

            // 增加计数
            RATE_LIMIT_CACHE
                .insert(cache_key, current_count + 1)
                .await;

            let info = RateLimitInfo {
                remaining: max_requests.saturating_sub(current_count + 1),
                limit: max_requests,
                reset: reset_after,
            };

            // 继续处理请求并附加速率限制头
            let mut res = srv.call(req).await?;
            info.apply(res.headers_mut());
            Ok(res.map_into_left_body())
        })
    }
}

/// 速率限制信息
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitInfo {
    pub remaining: u32,
    pub limit: u32,
    pub reset: u64,
}

impl RateLimitInfo {
    fn apply(&self, headers: &mut actix_web::http::header::HeaderMap) {
        for (name, value) in [
            ("x-ratelimit-limit", self.limit as u64),
            ("x-ratelimit-remaining", self.remaining as u64),
            ("x-ratelimit-reset", self.reset),
        ] {
            headers.insert(HeaderName::from_static(name), HeaderValue::from(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_presets() {
        let upload = RateLimit::media_upload();
        assert_eq!(upload.max_requests, 10);
        assert_eq!(upload.window_secs, 60);
        assert_eq!(upload.key_prefix, "upload");
    }

    #[test]
    fn test_window_is_clamped() {
        assert_eq!(RateLimit::new(1, 0).window_secs, 1);
        assert_eq!(RateLimit::new(1, 86_400).window_secs, MAX_WINDOW_SECS);
    }

    #[test]
    fn test_current_window_reset_within_window() {
        let (_, reset_after) = current_window(60);
        assert!((1..=60).contains(&reset_after));
    }

    #[test]
    fn test_rate_limit_headers() {
        let mut headers = actix_web::http::header::HeaderMap::new();
        RateLimitInfo {
            remaining: 3,
            limit: 10,
            reset: 42,
        }
        .apply(&mut headers);
        assert_eq!(headers.get("x-ratelimit-remaining").unwrap(), "3");
        assert_eq!(headers.get("x-ratelimit-limit").unwrap(), "10");
        assert_eq!(headers.get("x-ratelimit-reset").unwrap(), "42");
    }
}
