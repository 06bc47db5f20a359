use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::{
    ErrorCode,
    fees::{
        requests::FeeForm,
        responses::{FeeEditView, FeesView},
    },
};
use crate::services::{conflict_or_internal, internal_error};
use crate::utils::{redirect_success, render_view};

const FEES_PATH: &str = "/admin/fees";
const FEE_EXISTS: &str = "Fee already exists for this class.";

pub async fn fees_view(service: &AdminService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let fees = match storage.list_fees_with_class().await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list fees", e)),
    };
    let classes = match storage.list_classes().await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list classes", e)),
    };

    Ok(render_view(request, Some(FeesView { fees, classes })))
}

pub async fn fee_form(
    service: &AdminService,
    request: &HttpRequest,
    fee_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let fee = match storage.get_fee_by_id(fee_id).await {
        Ok(Some(fee)) => fee,
        Ok(None) => return Ok(render_view::<FeeEditView>(request, None)),
        Err(e) => return Ok(internal_error("Failed to get fee", e)),
    };
    let classes = match storage.list_classes().await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list classes", e)),
    };

    Ok(render_view(request, Some(FeeEditView { fee, classes })))
}

/// 每个班级只能有一条学费标准
pub async fn create_fee(
    service: &AdminService,
    request: &HttpRequest,
    form: FeeForm,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).create_fee(form).await {
        Ok(_) => Ok(redirect_success(FEES_PATH, "Fee structure added!")),
        Err(e) => Ok(conflict_or_internal(
            e,
            ErrorCode::FeeAlreadyExists,
            FEE_EXISTS,
            "Fee creation failed",
        )),
    }
}

pub async fn update_fee(
    service: &AdminService,
    request: &HttpRequest,
    fee_id: i64,
    form: FeeForm,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).update_fee(fee_id, form).await {
        Ok(_) => Ok(redirect_success(FEES_PATH, "Fee updated!")),
        Err(e) => Ok(conflict_or_internal(
            e,
            ErrorCode::FeeAlreadyExists,
            FEE_EXISTS,
            "Fee update failed",
        )),
    }
}

pub async fn delete_fee(
    service: &AdminService,
    request: &HttpRequest,
    fee_id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).delete_fee(fee_id).await {
        Ok(_) => Ok(redirect_success(FEES_PATH, "Fee deleted.")),
        Err(e) => Ok(internal_error("Fee deletion failed", e)),
    }
}
