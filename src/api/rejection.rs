//! 错误转换
//!
//! 所有失败在此统一转换为 `{success, error, message}` 响应体

use crate::api::responses::ErrorResponse;
use crate::error::AppError;
use std::convert::Infallible;
use tracing::{error, warn};
use warp::{
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    Rejection, Reply,
};

/// 领域错误对应的状态码
///
/// `legacy_missing_field_status` 打开时缺少字段沿用 405
pub fn status_for(err: &AppError, legacy_missing_field_status: bool) -> StatusCode {
    match err {
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::MissingField { .. } if legacy_missing_field_status => {
            StatusCode::METHOD_NOT_ALLOWED
        }
        AppError::MissingField { .. }
        | AppError::UnknownCategory { .. }
        | AppError::Unprocessable(_)
        | AppError::Storage(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        AppError::Seed(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 状态码对应的提示文本
pub fn message_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad Request",
        StatusCode::FORBIDDEN => "Forbidden",
        StatusCode::NOT_FOUND => "Resource Not Found",
        StatusCode::METHOD_NOT_ALLOWED => "Method Not Allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "Internal Server Error",
    }
}

/// 构造错误响应
pub fn error_reply(status: StatusCode) -> warp::reply::WithStatus<warp::reply::Json> {
    let body = ErrorResponse {
        success: false,
        error: status.as_u16(),
        message: message_for(status).to_string(),
    };
    warp::reply::with_status(warp::reply::json(&body), status)
}

pub async fn return_error(
    r: Rejection,
    legacy_missing_field_status: bool,
) -> Result<impl Reply, Infallible> {
    let status = if let Some(err) = r.find::<AppError>() {
        let status = status_for(err, legacy_missing_field_status);
        if status.is_server_error() || status == StatusCode::UNPROCESSABLE_ENTITY {
            error!("❌ {}", err);
        } else {
            warn!("⚠️ {}", err);
        }
        status
    } else if let Some(err) = r.find::<BodyDeserializeError>() {
        warn!("⚠️ 请求体无法解析: {}", err);
        StatusCode::UNPROCESSABLE_ENTITY
    } else if let Some(err) = r.find::<CorsForbidden>() {
        warn!("⚠️ {}", err);
        StatusCode::FORBIDDEN
    } else if r.find::<warp::reject::MethodNotAllowed>().is_some() {
        StatusCode::METHOD_NOT_ALLOWED
    } else if r.find::<warp::reject::InvalidQuery>().is_some()
        || r.find::<warp::reject::UnsupportedMediaType>().is_some()
        || r.find::<warp::reject::LengthRequired>().is_some()
        || r.find::<warp::reject::PayloadTooLarge>().is_some()
    {
        StatusCode::BAD_REQUEST
    } else if r.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        error!("❌ 未处理的请求错误: {:?}", r);
        StatusCode::INTERNAL_SERVER_ERROR
    };

    Ok(error_reply(status))
}
