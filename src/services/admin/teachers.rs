use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AdminService;
use crate::models::{
    ErrorCode,
    teachers::{
        entities::Teacher,
        requests::{CreateTeacher, CreateTeacherForm, UpdateTeacherForm},
    },
};
use crate::services::{conflict_or_internal, internal_error};
use crate::utils::password::hash_password;
use crate::utils::{redirect_success, render_view};

const TEACHERS_PATH: &str = "/admin/teachers";

pub async fn list_teachers(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).list_teachers().await {
        Ok(teachers) => Ok(render_view(request, Some(teachers))),
        Err(e) => Ok(internal_error("Failed to list teachers", e)),
    }
}

/// 添加页面没有数据，编辑页面返回教师档案
pub async fn teacher_form(
    service: &AdminService,
    request: &HttpRequest,
    teacher_id: Option<i64>,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = teacher_id else {
        return Ok(render_view::<Teacher>(request, None));
    };

    match service.get_storage(request).get_teacher_by_id(teacher_id).await {
        Ok(teacher) => Ok(render_view(request, teacher)),
        Err(e) => Ok(internal_error("Failed to get teacher", e)),
    }
}

pub async fn create_teacher(
    service: &AdminService,
    request: &HttpRequest,
    form: CreateTeacherForm,
) -> ActixResult<HttpResponse> {
    let password_hash = match hash_password(&form.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(internal_error("Failed to hash password", e)),
    };

    let create = CreateTeacher {
        name: form.name,
        email: form.email,
        password_hash,
        dob: form.dob,
        gender: form.gender,
        phone: form.phone,
        address: form.address,
        cnic: form.cnic,
    };

    match service.get_storage(request).create_teacher(create).await {
        Ok(teacher) => {
            info!("Teacher {} ({}) added", teacher.id, teacher.email);
            Ok(redirect_success(TEACHERS_PATH, "Teacher added!"))
        }
        Err(e) => Ok(conflict_or_internal(
            e,
            ErrorCode::UserEmailAlreadyExists,
            "Email already exists.",
            "Teacher creation failed",
        )),
    }
}

pub async fn update_teacher(
    service: &AdminService,
    request: &HttpRequest,
    teacher_id: i64,
    form: UpdateTeacherForm,
) -> ActixResult<HttpResponse> {
    match service
        .get_storage(request)
        .update_teacher(teacher_id, form)
        .await
    {
        Ok(_) => Ok(redirect_success(TEACHERS_PATH, "Teacher updated!")),
        Err(e) => Ok(internal_error("Teacher update failed", e)),
    }
}

pub async fn delete_teacher(
    service: &AdminService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).delete_teacher(teacher_id).await {
        Ok(_) => Ok(redirect_success(TEACHERS_PATH, "Teacher deleted.")),
        Err(e) => Ok(internal_error("Teacher deletion failed", e)),
    }
}
