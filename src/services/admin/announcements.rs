use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::{announcements::requests::AnnouncementForm, auth::entities::SessionContext};
use crate::services::internal_error;
use crate::utils::{redirect_success, render_view};

const ANNOUNCEMENTS_PATH: &str = "/admin/announcements";

pub async fn list_announcements(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).list_announcements(None).await {
        Ok(list) => Ok(render_view(request, Some(list))),
        Err(e) => Ok(internal_error("Failed to list announcements", e)),
    }
}

/// 面向对象缺省为全部
pub async fn create_announcement(
    service: &AdminService,
    request: &HttpRequest,
    session: &SessionContext,
    form: AnnouncementForm,
) -> ActixResult<HttpResponse> {
    let create = form.into_create(session.user_id, None);

    match service.get_storage(request).create_announcement(create).await {
        Ok(_) => Ok(redirect_success(ANNOUNCEMENTS_PATH, "Announcement created!")),
        Err(e) => Ok(internal_error("Announcement creation failed", e)),
    }
}

pub async fn delete_announcement(
    service: &AdminService,
    request: &HttpRequest,
    announcement_id: i64,
) -> ActixResult<HttpResponse> {
    match service
        .get_storage(request)
        .delete_announcement(announcement_id)
        .await
    {
        Ok(_) => Ok(redirect_success(ANNOUNCEMENTS_PATH, "Announcement deleted.")),
        Err(e) => Ok(internal_error("Announcement deletion failed", e)),
    }
}
