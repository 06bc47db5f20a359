use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{TeacherService, require_assignment, resolve_teacher_id, today};
use crate::models::{
    attendance::{
        requests::{AttendanceQuery, AttendanceSubmission},
        responses::{AttendanceSelection, TeacherAttendanceView},
    },
    auth::entities::SessionContext,
};
use crate::services::{bad_form, internal_error};
use crate::utils::{FormPairs, redirect_success, render_view};

/// 考勤页面：选中班级与科目后附带班级名单
pub async fn attendance_view(
    service: &TeacherService,
    request: &HttpRequest,
    session: &SessionContext,
    query: AttendanceQuery,
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

    let (selected, students) = match (query.class_id, query.subject_id) {
        (Some(class_id), Some(subject_id)) => {
            let students = match storage.list_students_by_class(class_id).await {
                Ok(list) => list,
                Err(e) => return Ok(internal_error("Failed to list students", e)),
            };
            (
                Some(AttendanceSelection {
                    class_id,
                    subject_id,
                }),
                students,
            )
        }
        _ => (None, Vec::new()),
    };

    Ok(render_view(
        request,
        Some(TeacherAttendanceView {
            assignments,
            selected,
            students,
            today: today(),
        }),
    ))
}

/// 批量保存考勤，同一学生、科目、日期只保留最新状态
pub async fn submit_attendance(
    service: &TeacherService,
    request: &HttpRequest,
    session: &SessionContext,
    pairs: &[(String, String)],
) -> ActixResult<HttpResponse> {
    let submission = match AttendanceSubmission::from_pairs(&FormPairs::new(pairs)) {
        Ok(submission) => submission,
        Err(msg) => return Ok(bad_form(msg)),
    };

    let storage = service.get_storage(request);
    let teacher_id = match resolve_teacher_id(&storage, session).await {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = require_assignment(
        &storage,
        teacher_id,
        submission.class_id,
        submission.subject_id,
    )
    .await
    {
        return Ok(resp);
    }

    match storage.upsert_attendance(&submission).await {
        Ok(saved) => {
            info!(
                "Teacher {} saved {} attendance records for {}",
                teacher_id, saved, submission.date
            );
            Ok(redirect_success("/teacher/attendance", "Attendance saved!"))
        }
        Err(e) => Ok(internal_error("Attendance save failed", e)),
    }
}
