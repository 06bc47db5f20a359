use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StudentService, resolve_student};
use crate::models::{applications::requests::ApplicationForm, auth::entities::SessionContext};
use crate::services::internal_error;
use crate::utils::{redirect_success, render_view};

pub async fn list_applications(
    service: &StudentService,
    request: &HttpRequest,
    session: &SessionContext,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let identity = match resolve_student(&storage, session).await {
        Ok(identity) => identity,
        Err(resp) => return Ok(resp),
    };

    match storage.list_applications_by_student(identity.student_id).await {
        Ok(list) => Ok(render_view(request, Some(list))),
        Err(e) => Ok(internal_error("Failed to list applications", e)),
    }
}

/// 新申请一律为待审批状态
pub async fn submit_application(
    service: &StudentService,
    request: &HttpRequest,
    session: &SessionContext,
    form: ApplicationForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let identity = match resolve_student(&storage, session).await {
        Ok(identity) => identity,
        Err(resp) => return Ok(resp),
    };

    match storage.create_application(identity.student_id, form).await {
        Ok(application) => {
            info!(
                "Student {} submitted application {} to {}",
                identity.student_id, application.id, application.send_to
            );
            Ok(redirect_success(
                "/student/applications",
                "Application submitted!",
            ))
        }
        Err(e) => Ok(internal_error("Application submission failed", e)),
    }
}
