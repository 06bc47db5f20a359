use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, resolve_student};
use crate::models::auth::entities::SessionContext;
use crate::services::internal_error;
use crate::utils::render_view;

pub async fn marks(
    service: &StudentService,
    request: &HttpRequest,
    session: &SessionContext,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let identity = match resolve_student(&storage, session).await {
        Ok(identity) => identity,
        Err(resp) => return Ok(resp),
    };

    match storage.list_marks_for_student(identity.student_id).await {
        Ok(list) => Ok(render_view(request, Some(list))),
        Err(e) => Ok(internal_error("Failed to list marks", e)),
    }
}
