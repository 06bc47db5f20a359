use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TeacherService, require_assignment, resolve_teacher_id};
use crate::models::{
    auth::entities::SessionContext,
    lectures::{requests::LectureForm, responses::TeacherLecturesView},
};
use crate::services::internal_error;
use crate::utils::{redirect_success, render_view};

pub async fn lectures_view(
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
    let lectures = match storage.list_lectures_by_teacher(teacher_id).await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list lectures", e)),
    };

    Ok(render_view(
        request,
        Some(TeacherLecturesView {
            assignments,
            lectures,
        }),
    ))
}

/// 只保存资料元数据，不接收文件内容
pub async fn create_lecture(
    service: &TeacherService,
    request: &HttpRequest,
    session: &SessionContext,
    form: LectureForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let teacher_id = match resolve_teacher_id(&storage, session).await {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) =
        require_assignment(&storage, teacher_id, form.class_id, form.subject_id).await
    {
        return Ok(resp);
    }

    match storage.create_lecture(form.into_create(teacher_id)).await {
        Ok(_) => Ok(redirect_success("/teacher/lectures", "Material uploaded!")),
        Err(e) => Ok(internal_error("Material upload failed", e)),
    }
}
