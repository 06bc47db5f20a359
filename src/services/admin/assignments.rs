use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AdminService;
use crate::models::teacher_subjects::{requests::AssignSubjectForm, responses::AssignSubjectView};
use crate::services::internal_error;
use crate::utils::{redirect_success, render_view};

const ASSIGN_PATH: &str = "/admin/assign-subject";

/// 分配页面：教师、班级、科目与现有分配
pub async fn assignment_view(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let teachers = match storage.list_teachers().await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list teachers", e)),
    };
    let classes = match storage.list_classes().await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list classes", e)),
    };
    let subjects = match storage.list_subjects().await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list subjects", e)),
    };
    let assignments = match storage.list_assignments(None).await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list assignments", e)),
    };

    Ok(render_view(
        request,
        Some(AssignSubjectView {
            teachers,
            classes,
            subjects,
            assignments,
        }),
    ))
}

pub async fn assign_subject(
    service: &AdminService,
    request: &HttpRequest,
    form: AssignSubjectForm,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).assign_subject(form).await {
        Ok(assignment) => {
            info!(
                "Teacher {} assigned subject {} in class {}",
                assignment.teacher_id, assignment.subject_id, assignment.class_id
            );
            Ok(redirect_success(ASSIGN_PATH, "Subject assigned!"))
        }
        Err(e) => Ok(internal_error("Subject assignment failed", e)),
    }
}

pub async fn delete_assignment(
    service: &AdminService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    match service
        .get_storage(request)
        .delete_assignment(assignment_id)
        .await
    {
        Ok(_) => Ok(redirect_success(ASSIGN_PATH, "Assignment removed.")),
        Err(e) => Ok(internal_error("Assignment removal failed", e)),
    }
}
