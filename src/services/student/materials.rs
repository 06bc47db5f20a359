use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, resolve_student};
use crate::models::{auth::entities::SessionContext, lectures::responses::LectureWithNames};
use crate::services::internal_error;
use crate::utils::render_view;

/// 本班课程资料；未分班的学生看到空列表
pub async fn materials(
    service: &StudentService,
    request: &HttpRequest,
    session: &SessionContext,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let identity = match resolve_student(&storage, session).await {
        Ok(identity) => identity,
        Err(resp) => return Ok(resp),
    };

    let Some(class_id) = identity.class_id else {
        return Ok(render_view(request, Some(Vec::<LectureWithNames>::new())));
    };

    match storage.list_lectures_by_class(class_id).await {
        Ok(list) => Ok(render_view(request, Some(list))),
        Err(e) => Ok(internal_error("Failed to list materials", e)),
    }
}
