use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::dashboard::responses::AdminDashboard;
use crate::services::internal_error;
use crate::utils::render_view;

const RECENT_ANNOUNCEMENTS: u64 = 5;

pub async fn dashboard(service: &AdminService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let stats = match storage.admin_stats().await {
        Ok(stats) => stats,
        Err(e) => return Ok(internal_error("Failed to load dashboard statistics", e)),
    };

    let announcements = match storage
        .list_recent_announcements(RECENT_ANNOUNCEMENTS)
        .await
    {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to load announcements", e)),
    };

    Ok(render_view(
        request,
        Some(AdminDashboard {
            stats,
            announcements,
        }),
    ))
}
