use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AdminService;
use crate::models::{
    ApiResponse, ErrorCode,
    applications::entities::ApplicationAction,
};
use crate::services::internal_error;
use crate::utils::flash::{Flash, redirect_with_flash};
use crate::utils::{redirect_success, render_view};

const APPLICATIONS_PATH: &str = "/admin/applications";

pub async fn list_applications(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match service
        .get_storage(request)
        .list_applications_with_student()
        .await
    {
        Ok(list) => Ok(render_view(request, Some(list))),
        Err(e) => Ok(internal_error("Failed to list applications", e)),
    }
}

/// 审批申请：只有待审批的申请可以通过或驳回
pub async fn application_action(
    service: &AdminService,
    request: &HttpRequest,
    application_id: i64,
    action: &str,
) -> ActixResult<HttpResponse> {
    let action = match action.parse::<ApplicationAction>() {
        Ok(action) => action,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ApplicationActionInvalid,
                msg,
            )));
        }
    };

    match service
        .get_storage(request)
        .transition_application(application_id, action)
        .await
    {
        Ok(true) => {
            let status = action.target_status();
            info!("Application {} {}", application_id, status);
            Ok(redirect_success(
                APPLICATIONS_PATH,
                format!("Application {status}!"),
            ))
        }
        Ok(false) => Ok(redirect_with_flash(
            APPLICATIONS_PATH,
            Flash::warning("Application is not pending."),
        )),
        Err(e) => Ok(internal_error("Application update failed", e)),
    }
}
