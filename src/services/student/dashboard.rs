use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, resolve_student};
use crate::models::{auth::entities::SessionContext, dashboard::responses::StudentDashboard};
use crate::services::internal_error;
use crate::utils::render_view;

const RECENT_ANNOUNCEMENTS: u64 = 5;

pub async fn dashboard(
    service: &StudentService,
    request: &HttpRequest,
    session: &SessionContext,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let identity = match resolve_student(&storage, session).await {
        Ok(identity) => identity,
        Err(resp) => return Ok(resp),
    };

    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
    let announcements = match storage
        .list_active_announcements(&today, RECENT_ANNOUNCEMENTS)
        .await
    {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list announcements", e)),
    };
    let student = match storage.get_student_with_class(identity.student_id).await {
        Ok(student) => student,
        Err(e) => return Ok(internal_error("Failed to get student", e)),
    };
    let attendance = match storage.attendance_summary(identity.student_id).await {
        Ok(summary) => summary,
        Err(e) => return Ok(internal_error("Failed to summarize attendance", e)),
    };
    let pending_applications = match storage
        .count_pending_applications_by_student(identity.student_id)
        .await
    {
        Ok(count) => count,
        Err(e) => return Ok(internal_error("Failed to count applications", e)),
    };

    Ok(render_view(
        request,
        Some(StudentDashboard {
            announcements,
            student,
            attendance,
            pending_applications,
        }),
    ))
}
