use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    announcements::{entities::AnnouncementAudience, requests::AnnouncementForm},
    auth::entities::SessionContext,
};
use crate::services::internal_error;
use crate::utils::{redirect_success, render_view};

pub async fn list_announcements(
    service: &TeacherService,
    request: &HttpRequest,
    session: &SessionContext,
) -> ActixResult<HttpResponse> {
    match service
        .get_storage(request)
        .list_announcements(Some(session.user_id))
        .await
    {
        Ok(list) => Ok(render_view(request, Some(list))),
        Err(e) => Ok(internal_error("Failed to list announcements", e)),
    }
}

/// 教师发布的公告只面向学生
pub async fn create_announcement(
    service: &TeacherService,
    request: &HttpRequest,
    session: &SessionContext,
    form: AnnouncementForm,
) -> ActixResult<HttpResponse> {
    let create = form.into_create(session.user_id, Some(AnnouncementAudience::Students));

    match service.get_storage(request).create_announcement(create).await {
        Ok(_) => Ok(redirect_success("/teacher/announcements", "Announcement posted!")),
        Err(e) => Ok(internal_error("Announcement creation failed", e)),
    }
}
