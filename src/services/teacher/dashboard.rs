use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TeacherService, resolve_teacher_id, today};
use crate::models::{
    auth::entities::SessionContext,
    dashboard::responses::{TeacherDashboard, TeacherStats},
};
use crate::services::internal_error;
use crate::utils::render_view;

const RECENT_ANNOUNCEMENTS: u64 = 5;

pub async fn dashboard(
    service: &TeacherService,
    request: &HttpRequest,
    session: &SessionContext,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let teacher_id = match resolve_teacher_id(&storage, session).await {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    let assignments = match storage.list_assignments(Some(teacher_id)).await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list assignments", e)),
    };
    let announcements = match storage
        .list_active_announcements(&today(), RECENT_ANNOUNCEMENTS)
        .await
    {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list announcements", e)),
    };
    let lectures = match storage.count_lectures_by_teacher(teacher_id).await {
        Ok(count) => count,
        Err(e) => return Ok(internal_error("Failed to count lectures", e)),
    };
    let unanswered_questions = match storage.count_unanswered_questions(teacher_id).await {
        Ok(count) => count,
        Err(e) => return Ok(internal_error("Failed to count questions", e)),
    };

    let stats = TeacherStats {
        subjects: assignments.len() as u64,
        lectures,
        unanswered_questions,
    };

    Ok(render_view(
        request,
        Some(TeacherDashboard {
            assignments,
            announcements,
            stats,
        }),
    ))
}
