use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AdminService;
use crate::errors::SchoolError;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{
        requests::{CreateStudent, CreateStudentForm, UpdateStudentForm},
        responses::StudentFormView,
    },
};
use crate::services::internal_error;
use crate::utils::password::hash_password;
use crate::utils::{redirect_success, render_view};

const STUDENTS_PATH: &str = "/admin/students";

pub async fn list_students(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).list_students_with_class().await {
        Ok(students) => Ok(render_view(request, Some(students))),
        Err(e) => Ok(internal_error("Failed to list students", e)),
    }
}

/// 添加（`student_id` 为空）或编辑学生页面
pub async fn student_form(
    service: &AdminService,
    request: &HttpRequest,
    student_id: Option<i64>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let classes = match storage.list_classes().await {
        Ok(classes) => classes,
        Err(e) => return Ok(internal_error("Failed to list classes", e)),
    };

    let student = match student_id {
        Some(id) => match storage.get_student_by_id(id).await {
            Ok(Some(student)) => Some(student),
            // 记录不存在时视图数据为空
            Ok(None) => return Ok(render_view::<StudentFormView>(request, None)),
            Err(e) => return Ok(internal_error("Failed to get student", e)),
        },
        None => None,
    };

    Ok(render_view(request, Some(StudentFormView { student, classes })))
}

pub async fn create_student(
    service: &AdminService,
    request: &HttpRequest,
    form: CreateStudentForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let password_hash = match hash_password(&form.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(internal_error("Failed to hash password", e)),
    };

    let create = CreateStudent {
        name: form.name,
        email: form.email,
        password_hash,
        dob: form.dob,
        gender: form.gender,
        address: form.address,
        parent_name: form.parent_name,
        parent_cnic: form.parent_cnic,
        phone: form.phone,
        class_id: form.class_id,
        roll_number: form.roll_number,
    };

    match storage.create_student(create).await {
        Ok(student) => {
            info!(
                "Student {} registered with roll number {}",
                student.id, student.roll_number
            );
            Ok(redirect_success(
                STUDENTS_PATH,
                "Student registered successfully!",
            ))
        }
        Err(e) if e.is_conflict() => Ok(profile_conflict(&e)),
        Err(e) => Ok(internal_error("Student registration failed", e)),
    }
}

/// 学号冲突与邮箱冲突分别提示
fn profile_conflict(e: &SchoolError) -> HttpResponse {
    let (code, message) = if e.to_string().contains("roll_number") {
        (
            ErrorCode::RollNumberAlreadyExists,
            "Roll number already exists.",
        )
    } else {
        (ErrorCode::UserEmailAlreadyExists, "Email already exists.")
    };
    info!("Student registration rejected: {}", e);
    HttpResponse::Conflict().json(ApiResponse::error_empty(code, message))
}

pub async fn update_student(
    service: &AdminService,
    request: &HttpRequest,
    student_id: i64,
    form: UpdateStudentForm,
) -> ActixResult<HttpResponse> {
    match service
        .get_storage(request)
        .update_student(student_id, form)
        .await
    {
        Ok(_) => Ok(redirect_success(STUDENTS_PATH, "Student updated!")),
        Err(e) => Ok(internal_error("Student update failed", e)),
    }
}

pub async fn delete_student(
    service: &AdminService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).delete_student(student_id).await {
        Ok(deleted) => {
            if deleted {
                info!("Student {} deleted", student_id);
            }
            Ok(redirect_success(STUDENTS_PATH, "Student deleted."))
        }
        Err(e) => Ok(internal_error("Student deletion failed", e)),
    }
}
