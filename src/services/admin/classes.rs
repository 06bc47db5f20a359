use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::{ErrorCode, classes::requests::ClassForm};
use crate::services::{conflict_or_internal, internal_error};
use crate::utils::{redirect_success, render_view};

const CLASSES_PATH: &str = "/admin/classes";
const CLASS_EXISTS: &str = "Class already exists.";

pub async fn list_classes(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).list_classes().await {
        Ok(classes) => Ok(render_view(request, Some(classes))),
        Err(e) => Ok(internal_error("Failed to list classes", e)),
    }
}

pub async fn class_form(
    service: &AdminService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).get_class_by_id(class_id).await {
        Ok(class) => Ok(render_view(request, class)),
        Err(e) => Ok(internal_error("Failed to get class", e)),
    }
}

pub async fn create_class(
    service: &AdminService,
    request: &HttpRequest,
    form: ClassForm,
) -> ActixResult<HttpResponse> {
    match service
        .get_storage(request)
        .create_class(form.class_name.trim())
        .await
    {
        Ok(_) => Ok(redirect_success(CLASSES_PATH, "Class added!")),
        Err(e) => Ok(conflict_or_internal(
            e,
            ErrorCode::ClassAlreadyExists,
            CLASS_EXISTS,
            "Class creation failed",
        )),
    }
}

pub async fn update_class(
    service: &AdminService,
    request: &HttpRequest,
    class_id: i64,
    form: ClassForm,
) -> ActixResult<HttpResponse> {
    match service
        .get_storage(request)
        .update_class(class_id, form.class_name.trim())
        .await
    {
        Ok(_) => Ok(redirect_success(CLASSES_PATH, "Class updated!")),
        Err(e) => Ok(conflict_or_internal(
            e,
            ErrorCode::ClassAlreadyExists,
            CLASS_EXISTS,
            "Class update failed",
        )),
    }
}

/// 删除班级不会级联删除学生、科目等记录
pub async fn delete_class(
    service: &AdminService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).delete_class(class_id).await {
        Ok(_) => Ok(redirect_success(CLASSES_PATH, "Class deleted.")),
        Err(e) => Ok(internal_error("Class deletion failed", e)),
    }
}
