use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, resolve_student};
use crate::models::{
    attendance::responses::StudentAttendanceView, auth::entities::SessionContext,
};
use crate::services::internal_error;
use crate::utils::render_view;

/// 考勤记录（按日期倒序）与出勤率
pub async fn attendance(
    service: &StudentService,
    request: &HttpRequest,
    session: &SessionContext,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let identity = match resolve_student(&storage, session).await {
        Ok(identity) => identity,
        Err(resp) => return Ok(resp),
    };

    let records = match storage.list_attendance_for_student(identity.student_id).await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list attendance", e)),
    };
    let summary = match storage.attendance_summary(identity.student_id).await {
        Ok(summary) => summary,
        Err(e) => return Ok(internal_error("Failed to summarize attendance", e)),
    };

    Ok(render_view(
        request,
        Some(StudentAttendanceView { records, summary }),
    ))
}
