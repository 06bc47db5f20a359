pub mod announcements;
pub mod applications;
pub mod assignments;
pub mod classes;
pub mod dashboard;
pub mod fees;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;
pub mod vouchers;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    announcements::requests::AnnouncementForm,
    auth::entities::SessionContext,
    classes::requests::ClassForm,
    fees::requests::FeeForm,
    students::requests::{CreateStudentForm, UpdateStudentForm},
    subjects::requests::SubjectForm,
    teacher_subjects::requests::AssignSubjectForm,
    teachers::requests::{CreateTeacherForm, UpdateTeacherForm},
    users::requests::AddUserForm,
    vouchers::requests::{GenerateVoucherForm, VoucherSearchQuery},
};
use crate::storage::Storage;

/// 管理员门户
pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 首页
    pub async fn dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::dashboard(self, request).await
    }

    // 学生管理
    pub async fn list_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        students::list_students(self, request).await
    }

    pub async fn student_form(
        &self,
        request: &HttpRequest,
        student_id: Option<i64>,
    ) -> ActixResult<HttpResponse> {
        students::student_form(self, request, student_id).await
    }

    pub async fn create_student(
        &self,
        request: &HttpRequest,
        form: CreateStudentForm,
    ) -> ActixResult<HttpResponse> {
        students::create_student(self, request, form).await
    }

    pub async fn update_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
        form: UpdateStudentForm,
    ) -> ActixResult<HttpResponse> {
        students::update_student(self, request, student_id, form).await
    }

    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        students::delete_student(self, request, student_id).await
    }

    // 教师管理
    pub async fn list_teachers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        teachers::list_teachers(self, request).await
    }

    pub async fn teacher_form(
        &self,
        request: &HttpRequest,
        teacher_id: Option<i64>,
    ) -> ActixResult<HttpResponse> {
        teachers::teacher_form(self, request, teacher_id).await
    }

    pub async fn create_teacher(
        &self,
        request: &HttpRequest,
        form: CreateTeacherForm,
    ) -> ActixResult<HttpResponse> {
        teachers::create_teacher(self, request, form).await
    }

    pub async fn update_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
        form: UpdateTeacherForm,
    ) -> ActixResult<HttpResponse> {
        teachers::update_teacher(self, request, teacher_id, form).await
    }

    pub async fn delete_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        teachers::delete_teacher(self, request, teacher_id).await
    }

    // 班级管理
    pub async fn list_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        classes::list_classes(self, request).await
    }

    pub async fn class_form(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        classes::class_form(self, request, class_id).await
    }

    pub async fn create_class(
        &self,
        request: &HttpRequest,
        form: ClassForm,
    ) -> ActixResult<HttpResponse> {
        classes::create_class(self, request, form).await
    }

    pub async fn update_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
        form: ClassForm,
    ) -> ActixResult<HttpResponse> {
        classes::update_class(self, request, class_id, form).await
    }

    pub async fn delete_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        classes::delete_class(self, request, class_id).await
    }

    // 科目管理
    pub async fn list_subjects(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        subjects::list_subjects(self, request).await
    }

    pub async fn subject_form(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        subjects::subject_form(self, request, subject_id).await
    }

    pub async fn create_subject(
        &self,
        request: &HttpRequest,
        form: SubjectForm,
    ) -> ActixResult<HttpResponse> {
        subjects::create_subject(self, request, form).await
    }

    pub async fn update_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
        form: SubjectForm,
    ) -> ActixResult<HttpResponse> {
        subjects::update_subject(self, request, subject_id, form).await
    }

    pub async fn delete_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        subjects::delete_subject(self, request, subject_id).await
    }

    // 授课分配
    pub async fn assignment_view(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        assignments::assignment_view(self, request).await
    }

    pub async fn assign_subject(
        &self,
        request: &HttpRequest,
        form: AssignSubjectForm,
    ) -> ActixResult<HttpResponse> {
        assignments::assign_subject(self, request, form).await
    }

    pub async fn delete_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        assignments::delete_assignment(self, request, assignment_id).await
    }

    // 公告
    pub async fn list_announcements(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        announcements::list_announcements(self, request).await
    }

    pub async fn create_announcement(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
        form: AnnouncementForm,
    ) -> ActixResult<HttpResponse> {
        announcements::create_announcement(self, request, session, form).await
    }

    pub async fn delete_announcement(
        &self,
        request: &HttpRequest,
        announcement_id: i64,
    ) -> ActixResult<HttpResponse> {
        announcements::delete_announcement(self, request, announcement_id).await
    }

    // 申请审批
    pub async fn list_applications(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        applications::list_applications(self, request).await
    }

    pub async fn application_action(
        &self,
        request: &HttpRequest,
        application_id: i64,
        action: &str,
    ) -> ActixResult<HttpResponse> {
        applications::application_action(self, request, application_id, action).await
    }

    // 学费
    pub async fn fees_view(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        fees::fees_view(self, request).await
    }

    pub async fn fee_form(&self, request: &HttpRequest, fee_id: i64) -> ActixResult<HttpResponse> {
        fees::fee_form(self, request, fee_id).await
    }

    pub async fn create_fee(
        &self,
        request: &HttpRequest,
        form: FeeForm,
    ) -> ActixResult<HttpResponse> {
        fees::create_fee(self, request, form).await
    }

    pub async fn update_fee(
        &self,
        request: &HttpRequest,
        fee_id: i64,
        form: FeeForm,
    ) -> ActixResult<HttpResponse> {
        fees::update_fee(self, request, fee_id, form).await
    }

    pub async fn delete_fee(&self, request: &HttpRequest, fee_id: i64) -> ActixResult<HttpResponse> {
        fees::delete_fee(self, request, fee_id).await
    }

    // 缴费单
    pub async fn search_voucher(
        &self,
        request: &HttpRequest,
        query: VoucherSearchQuery,
    ) -> ActixResult<HttpResponse> {
        vouchers::search_voucher(self, request, query).await
    }

    pub async fn generate_voucher(
        &self,
        request: &HttpRequest,
        form: GenerateVoucherForm,
    ) -> ActixResult<HttpResponse> {
        vouchers::generate_voucher(self, request, form).await
    }

    pub async fn view_voucher(
        &self,
        request: &HttpRequest,
        voucher_id: i64,
    ) -> ActixResult<HttpResponse> {
        vouchers::view_voucher(self, request, voucher_id).await
    }

    // 管理员账号
    pub async fn add_user_view(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        users::add_user_view(request).await
    }

    pub async fn add_user(
        &self,
        request: &HttpRequest,
        form: AddUserForm,
    ) -> ActixResult<HttpResponse> {
        users::add_user(self, request, form).await
    }
}
