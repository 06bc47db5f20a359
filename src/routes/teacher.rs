use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireRole, RequireSession};
use crate::models::{
    announcements::requests::AnnouncementForm, attendance::requests::AttendanceQuery,
    auth::entities::SessionContext, lectures::requests::LectureForm,
    marks::requests::MarksQuery, qa::requests::AnswerQuestionForm, users::entities::UserRole,
};
use crate::services::TeacherService;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn dashboard(req: HttpRequest, session: SessionContext) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.dashboard(&req, &session).await
}

pub async fn attendance_view(
    req: HttpRequest,
    session: SessionContext,
    query: web::Query<AttendanceQuery>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .attendance_view(&req, &session, query.into_inner())
        .await
}

// 重复字段（student_ids、present）按原始键值对读取
pub async fn submit_attendance(
    req: HttpRequest,
    session: SessionContext,
    form: web::Form<Vec<(String, String)>>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .submit_attendance(&req, &session, &form)
        .await
}

pub async fn marks_view(
    req: HttpRequest,
    session: SessionContext,
    query: web::Query<MarksQuery>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .marks_view(&req, &session, query.into_inner())
        .await
}

pub async fn submit_marks(
    req: HttpRequest,
    session: SessionContext,
    form: web::Form<Vec<(String, String)>>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.submit_marks(&req, &session, &form).await
}

pub async fn lectures_view(req: HttpRequest, session: SessionContext) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.lectures_view(&req, &session).await
}

pub async fn create_lecture(
    req: HttpRequest,
    session: SessionContext,
    form: web::Form<LectureForm>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_lecture(&req, &session, form.into_inner())
        .await
}

pub async fn list_announcements(
    req: HttpRequest,
    session: SessionContext,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_announcements(&req, &session).await
}

pub async fn create_announcement(
    req: HttpRequest,
    session: SessionContext,
    form: web::Form<AnnouncementForm>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_announcement(&req, &session, form.into_inner())
        .await
}

pub async fn list_questions(req: HttpRequest, session: SessionContext) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_questions(&req, &session).await
}

pub async fn answer_question(
    req: HttpRequest,
    session: SessionContext,
    form: web::Form<AnswerQuestionForm>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .answer_question(&req, &session, form.into_inner())
        .await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/teacher")
            .wrap(RequireRole::new(UserRole::Teacher))
            .wrap(RequireSession)
            .route("", web::get().to(dashboard))
            .service(
                web::resource("/attendance")
                    .route(web::get().to(attendance_view))
                    .route(web::post().to(submit_attendance)),
            )
            .service(
                web::resource("/marks")
                    .route(web::get().to(marks_view))
                    .route(web::post().to(submit_marks)),
            )
            .service(
                web::resource("/lectures")
                    .route(web::get().to(lectures_view))
                    .route(web::post().to(create_lecture)),
            )
            .service(
                web::resource("/announcements")
                    .route(web::get().to(list_announcements))
                    .route(web::post().to(create_announcement)),
            )
            .service(
                web::resource("/qa")
                    .route(web::get().to(list_questions))
                    .route(web::post().to(answer_question)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        students::requests::CreateStudent, subjects::requests::SubjectForm,
        teacher_subjects::requests::AssignSubjectForm, teachers::requests::CreateTeacher,
    };
    use crate::routes::test_support::{app_data, memory_storage, session_for};
    use crate::storage::Storage;
    use actix_web::http::StatusCode;
    use actix_web::{App, body::to_bytes, test};
    use std::sync::Arc;

    struct Fixture {
        class_id: i64,
        subject_id: i64,
        student_ids: Vec<i64>,
    }

    fn student(name: &str, email: &str, class_id: i64) -> CreateStudent {
        CreateStudent {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: String::new(),
            dob: None,
            gender: None,
            address: None,
            parent_name: None,
            parent_cnic: None,
            phone: None,
            class_id: Some(class_id),
            roll_number: None,
        }
    }

    async fn seed(storage: &Arc<dyn Storage>, assign: bool) -> Fixture {
        let class = storage.create_class("Nine").await.unwrap();
        let subject = storage
            .create_subject(SubjectForm {
                subject_name: "Physics".to_string(),
                class_id: Some(class.id),
            })
            .await
            .unwrap();
        let teacher = storage
            .create_teacher(CreateTeacher {
                name: "Ali Hassan".to_string(),
                email: "ali@school.com".to_string(),
                password_hash: String::new(),
                dob: None,
                gender: None,
                phone: None,
                address: None,
                cnic: None,
            })
            .await
            .unwrap();
        if assign {
            storage
                .assign_subject(AssignSubjectForm {
                    teacher_id: teacher.id,
                    subject_id: subject.id,
                    class_id: class.id,
                })
                .await
                .unwrap();
        }
        let a = storage
            .create_student(student("Ahmed Khan", "ahmed@school.com", class.id))
            .await
            .unwrap();
        let b = storage
            .create_student(student("Sara Ali", "sara@school.com", class.id))
            .await
            .unwrap();

        Fixture {
            class_id: class.id,
            subject_id: subject.id,
            student_ids: vec![a.id, b.id],
        }
    }

    fn attendance_form(f: &Fixture, present: &[i64]) -> Vec<(String, String)> {
        let mut form = vec![
            ("att_date".to_string(), "2025-03-01".to_string()),
            ("class_id".to_string(), f.class_id.to_string()),
            ("subject_id".to_string(), f.subject_id.to_string()),
        ];
        for id in &f.student_ids {
            form.push(("student_ids".to_string(), id.to_string()));
        }
        for id in present {
            form.push(("present".to_string(), id.to_string()));
        }
        form
    }

    #[actix_web::test]
    async fn test_attendance_resubmission_keeps_latest_status() {
        let storage = memory_storage().await;
        let fixture = seed(&storage, true).await;
        let (data, form_cfg, ..) = app_data(&storage);
        let app = test::init_service(
            App::new()
                .app_data(data)
                .app_data(form_cfg)
                .configure(configure_teacher_routes),
        )
        .await;
        let cookie = session_for(&storage, "ali@school.com", UserRole::Teacher).await;
        let ahmed = fixture.student_ids[0];

        for present in [vec![ahmed], vec![]] {
            let req = test::TestRequest::post()
                .uri("/teacher/attendance")
                .cookie(cookie.clone())
                .set_form(attendance_form(&fixture, &present))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        }

        let records = storage.list_attendance_for_student(ahmed).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].record.status,
            crate::models::attendance::entities::AttendanceStatus::Absent
        );
    }

    #[actix_web::test]
    async fn test_unassigned_teacher_cannot_submit_marks() {
        let storage = memory_storage().await;
        let fixture = seed(&storage, false).await;
        let (data, form_cfg, ..) = app_data(&storage);
        let app = test::init_service(
            App::new()
                .app_data(data)
                .app_data(form_cfg)
                .configure(configure_teacher_routes),
        )
        .await;
        let cookie = session_for(&storage, "ali@school.com", UserRole::Teacher).await;

        let mut form = vec![
            ("class_id".to_string(), fixture.class_id.to_string()),
            ("subject_id".to_string(), fixture.subject_id.to_string()),
            ("exam_type".to_string(), "Midterm".to_string()),
            ("total_marks".to_string(), "100".to_string()),
        ];
        for id in &fixture.student_ids {
            form.push(("student_ids".to_string(), id.to_string()));
            form.push((format!("marks_{id}"), "75".to_string()));
        }

        let req = test::TestRequest::post()
            .uri("/teacher/marks")
            .cookie(cookie)
            .set_form(form)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(
            storage
                .list_marks(fixture.class_id, fixture.subject_id, "Midterm")
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[actix_web::test]
    async fn test_teacher_without_profile_is_forbidden() {
        let storage = memory_storage().await;
        let (data, ..) = app_data(&storage);
        let app =
            test::init_service(App::new().app_data(data).configure(configure_teacher_routes))
                .await;
        let cookie = session_for(&storage, "ghost@school.com", UserRole::Teacher).await;

        let req = test::TestRequest::get()
            .uri("/teacher")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Teacher profile not found.");
    }

    #[actix_web::test]
    async fn test_attendance_view_lists_roster_for_selection() {
        let storage = memory_storage().await;
        let fixture = seed(&storage, true).await;
        let (data, _, query_cfg, _) = app_data(&storage);
        let app = test::init_service(
            App::new()
                .app_data(data)
                .app_data(query_cfg)
                .configure(configure_teacher_routes),
        )
        .await;
        let cookie = session_for(&storage, "ali@school.com", UserRole::Teacher).await;

        let req = test::TestRequest::get()
            .uri(&format!(
                "/teacher/attendance?class_id={}&subject_id={}",
                fixture.class_id, fixture.subject_id
            ))
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["students"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["data"]["assignments"][0]["subject_name"], "Physics");
    }
}
