pub mod applications;
pub mod attendance;
pub mod dashboard;
pub mod marks;
pub mod materials;
pub mod qa;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    applications::requests::ApplicationForm,
    auth::entities::SessionContext,
    qa::requests::AskQuestionForm,
    students::entities::StudentIdentity,
};
use crate::services::internal_error;
use crate::storage::Storage;

/// 学生门户
pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    pub async fn dashboard(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
    ) -> ActixResult<HttpResponse> {
        dashboard::dashboard(self, request, session).await
    }

    pub async fn attendance(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
    ) -> ActixResult<HttpResponse> {
        attendance::attendance(self, request, session).await
    }

    pub async fn marks(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
    ) -> ActixResult<HttpResponse> {
        marks::marks(self, request, session).await
    }

    pub async fn materials(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
    ) -> ActixResult<HttpResponse> {
        materials::materials(self, request, session).await
    }

    // 申请
    pub async fn list_applications(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
    ) -> ActixResult<HttpResponse> {
        applications::list_applications(self, request, session).await
    }

    pub async fn submit_application(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
        form: ApplicationForm,
    ) -> ActixResult<HttpResponse> {
        applications::submit_application(self, request, session, form).await
    }

    // 答疑
    pub async fn qa_view(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
    ) -> ActixResult<HttpResponse> {
        qa::qa_view(self, request, session).await
    }

    pub async fn ask_question(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
        form: AskQuestionForm,
    ) -> ActixResult<HttpResponse> {
        qa::ask_question(self, request, session, form).await
    }
}

/// 通过会话邮箱解析学生 ID 与班级
pub(crate) async fn resolve_student(
    storage: &Arc<dyn Storage>,
    session: &SessionContext,
) -> Result<StudentIdentity, HttpResponse> {
    match storage.find_student_identity_by_email(&session.email).await {
        Ok(Some(identity)) => Ok(identity),
        Ok(None) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::StudentProfileNotFound,
            "Student profile not found.",
        ))),
        Err(e) => Err(internal_error("Failed to resolve student profile", e)),
    }
}
