use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{TeacherService, require_assignment, resolve_teacher_id};
use crate::models::{
    auth::entities::SessionContext,
    marks::{
        requests::{MarksQuery, MarksSubmission},
        responses::{MarksSelection, TeacherMarksView},
    },
};
use crate::services::{bad_form, internal_error};
use crate::utils::{FormPairs, redirect_success, render_view};

pub async fn marks_view(
    service: &TeacherService,
    request: &HttpRequest,
    session: &SessionContext,
    query: MarksQuery,
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

    let MarksQuery {
        class_id,
        subject_id,
        exam_type,
    } = query;

    let (Some(class_id), Some(subject_id)) = (class_id, subject_id) else {
        return Ok(render_view(
            request,
            Some(TeacherMarksView {
                assignments,
                selected: None,
                students: Vec::new(),
                existing: Vec::new(),
            }),
        ));
    };

    let students = match storage.list_students_by_class(class_id).await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list students", e)),
    };

    // 选定考试后带出已录入成绩
    let existing = match exam_type.as_deref() {
        Some(exam_type) => match storage.list_marks(class_id, subject_id, exam_type).await {
            Ok(list) => list,
            Err(e) => return Ok(internal_error("Failed to list marks", e)),
        },
        None => Vec::new(),
    };

    Ok(render_view(
        request,
        Some(TeacherMarksView {
            assignments,
            selected: Some(MarksSelection {
                class_id,
                subject_id,
                exam_type: exam_type.unwrap_or_default(),
            }),
            students,
            existing,
        }),
    ))
}

pub async fn submit_marks(
    service: &TeacherService,
    request: &HttpRequest,
    session: &SessionContext,
    pairs: &[(String, String)],
) -> ActixResult<HttpResponse> {
    let submission = match MarksSubmission::from_pairs(&FormPairs::new(pairs)) {
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

    match storage.upsert_marks(&submission).await {
        Ok(saved) => {
            info!(
                "Teacher {} saved {} marks for exam {}",
                teacher_id, saved, submission.exam_type
            );
            Ok(redirect_success("/teacher/marks", "Marks saved!"))
        }
        Err(e) => Ok(internal_error("Marks save failed", e)),
    }
}
