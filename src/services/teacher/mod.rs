pub mod announcements;
pub mod attendance;
pub mod dashboard;
pub mod lectures;
pub mod marks;
pub mod qa;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    announcements::requests::AnnouncementForm,
    attendance::requests::AttendanceQuery,
    auth::entities::SessionContext,
    lectures::requests::LectureForm,
    marks::requests::MarksQuery,
    qa::requests::AnswerQuestionForm,
};
use crate::services::internal_error;
use crate::storage::Storage;

/// 教师门户
pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
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

    // 考勤
    pub async fn attendance_view(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
        query: AttendanceQuery,
    ) -> ActixResult<HttpResponse> {
        attendance::attendance_view(self, request, session, query).await
    }

    pub async fn submit_attendance(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
        pairs: &[(String, String)],
    ) -> ActixResult<HttpResponse> {
        attendance::submit_attendance(self, request, session, pairs).await
    }

    // 成绩
    pub async fn marks_view(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
        query: MarksQuery,
    ) -> ActixResult<HttpResponse> {
        marks::marks_view(self, request, session, query).await
    }

    pub async fn submit_marks(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
        pairs: &[(String, String)],
    ) -> ActixResult<HttpResponse> {
        marks::submit_marks(self, request, session, pairs).await
    }

    // 课程资料
    pub async fn lectures_view(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
    ) -> ActixResult<HttpResponse> {
        lectures::lectures_view(self, request, session).await
    }

    pub async fn create_lecture(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
        form: LectureForm,
    ) -> ActixResult<HttpResponse> {
        lectures::create_lecture(self, request, session, form).await
    }

    // 公告
    pub async fn list_announcements(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
    ) -> ActixResult<HttpResponse> {
        announcements::list_announcements(self, request, session).await
    }

    pub async fn create_announcement(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
        form: AnnouncementForm,
    ) -> ActixResult<HttpResponse> {
        announcements::create_announcement(self, request, session, form).await
    }

    // 答疑
    pub async fn list_questions(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
    ) -> ActixResult<HttpResponse> {
        qa::list_questions(self, request, session).await
    }

    pub async fn answer_question(
        &self,
        request: &HttpRequest,
        session: &SessionContext,
        form: AnswerQuestionForm,
    ) -> ActixResult<HttpResponse> {
        qa::answer_question(self, request, session, form).await
    }
}

/// 通过会话邮箱查找教师档案；没有档案的教师账号返回 403
pub(crate) async fn resolve_teacher_id(
    storage: &Arc<dyn Storage>,
    session: &SessionContext,
) -> Result<i64, HttpResponse> {
    match storage.find_teacher_id_by_email(&session.email).await {
        Ok(Some(teacher_id)) => Ok(teacher_id),
        Ok(None) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::TeacherProfileNotFound,
            "Teacher profile not found.",
        ))),
        Err(e) => Err(internal_error("Failed to resolve teacher profile", e)),
    }
}

/// 考勤、成绩、资料写入要求教师持有对应班级与科目的分配
pub(crate) async fn require_assignment(
    storage: &Arc<dyn Storage>,
    teacher_id: i64,
    class_id: i64,
    subject_id: i64,
) -> Result<(), HttpResponse> {
    match storage
        .teacher_has_assignment(teacher_id, class_id, subject_id)
        .await
    {
        Ok(true) => Ok(()),
        Ok(false) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::SubjectAssignmentRequired,
            "You are not assigned to this class and subject.",
        ))),
        Err(e) => Err(internal_error("Failed to check assignment", e)),
    }
}

/// 今日日期（YYYY-MM-DD）
pub(crate) fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
