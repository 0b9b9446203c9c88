use crate::error::{ApiError, ApiResult};
use crate::models::Receipt;
use crate::service::ReceiptService;
use axum::{
    body::Bytes,
    extract::{Json, Path, State},
    http::StatusCode,
};
use serde::Serialize;
use std::sync::Arc;

/// 处理结果响应体
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// 积分查询响应体
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: i64,
}

/// POST /receipts/process
///
/// 请求体自行解析：兼容模式下缺失字段按零值计分，无法解析时也返回ID。
pub async fn process_receipt(
    State(service): State<Arc<ReceiptService>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<ProcessResponse>)> {
    let parsed = if service.is_legacy() {
        Receipt::from_json_lenient(&body)
    } else {
        serde_json::from_slice::<Receipt>(&body)
    };

    let id = match parsed {
        Ok(receipt) => service.process(&receipt).map_err(|e| {
            tracing::warn!("Rejected receipt: {}", e);
            ApiError::from(e)
        })?,
        Err(e) if service.is_legacy() => {
            tracing::error!("Invalid JSON payload: {}", e);
            service.process_unreadable()
        }
        Err(e) => {
            tracing::warn!("Invalid JSON payload: {}", e);
            return Err(ApiError::BadRequest(e.to_string()));
        }
    };

    Ok((StatusCode::CREATED, Json(ProcessResponse { id })))
}

/// GET /receipts/:id/points
pub async fn get_points(
    State(service): State<Arc<ReceiptService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = if service.is_legacy() {
        service.points_or_zero(&id)
    } else {
        service.points(&id).ok_or(ApiError::NotFound(id))?
    };

    Ok(Json(PointsResponse { points }))
}
