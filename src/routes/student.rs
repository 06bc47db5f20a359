use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireRole, RequireSession};
use crate::models::{
    applications::requests::ApplicationForm, auth::entities::SessionContext,
    qa::requests::AskQuestionForm, users::entities::UserRole,
};
use crate::services::StudentService;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn dashboard(req: HttpRequest, session: SessionContext) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.dashboard(&req, &session).await
}

pub async fn attendance(req: HttpRequest, session: SessionContext) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.attendance(&req, &session).await
}

pub async fn marks(req: HttpRequest, session: SessionContext) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.marks(&req, &session).await
}

pub async fn materials(req: HttpRequest, session: SessionContext) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.materials(&req, &session).await
}

pub async fn list_applications(
    req: HttpRequest,
    session: SessionContext,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_applications(&req, &session).await
}

pub async fn submit_application(
    req: HttpRequest,
    session: SessionContext,
    form: web::Form<ApplicationForm>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .submit_application(&req, &session, form.into_inner())
        .await
}

pub async fn qa_view(req: HttpRequest, session: SessionContext) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.qa_view(&req, &session).await
}

pub async fn ask_question(
    req: HttpRequest,
    session: SessionContext,
    form: web::Form<AskQuestionForm>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .ask_question(&req, &session, form.into_inner())
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/student")
            .wrap(RequireRole::new(UserRole::Student))
            .wrap(RequireSession)
            .route("", web::get().to(dashboard))
            .route("/attendance", web::get().to(attendance))
            .route("/marks", web::get().to(marks))
            .route("/materials", web::get().to(materials))
            .service(
                web::resource("/applications")
                    .route(web::get().to(list_applications))
                    .route(web::post().to(submit_application)),
            )
            .service(
                web::resource("/qa")
                    .route(web::get().to(qa_view))
                    .route(web::post().to(ask_question)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        attendance::requests::{AttendanceEntry, AttendanceSubmission},
        attendance::entities::AttendanceStatus,
        students::requests::CreateStudent,
        subjects::requests::SubjectForm,
    };
    use crate::routes::test_support::{app_data, memory_storage, session_for};
    use actix_web::http::StatusCode;
    use actix_web::{App, body::to_bytes, test};

    fn ahmed(class_id: Option<i64>) -> CreateStudent {
        CreateStudent {
            name: "Ahmed Khan".to_string(),
            email: "ahmed@school.com".to_string(),
            password_hash: String::new(),
            dob: None,
            gender: None,
            address: None,
            parent_name: Some("Imran Khan".to_string()),
            parent_cnic: None,
            phone: None,
            class_id,
            roll_number: Some("1001".to_string()),
        }
    }

    async fn json_body(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn test_dashboard_reports_attendance_percentage() {
        let storage = memory_storage().await;
        let class = storage.create_class("Nine").await.unwrap();
        let subject = storage
            .create_subject(SubjectForm {
                subject_name: "Physics".to_string(),
                class_id: Some(class.id),
            })
            .await
            .unwrap();
        let student = storage.create_student(ahmed(Some(class.id))).await.unwrap();

        // 10 天中出勤 8 天
        for day in 1..=10 {
            let status = if day <= 8 {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            };
            let submission = AttendanceSubmission {
                date: format!("2025-03-{day:02}"),
                class_id: class.id,
                subject_id: subject.id,
                entries: vec![AttendanceEntry {
                    student_id: student.id,
                    status,
                }],
            };
            storage.upsert_attendance(&submission).await.unwrap();
        }

        let (data, ..) = app_data(&storage);
        let app =
            test::init_service(App::new().app_data(data).configure(configure_student_routes))
                .await;
        let cookie = session_for(&storage, "ahmed@school.com", UserRole::Student).await;

        let req = test::TestRequest::get()
            .uri("/student")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["data"]["attendance"]["present"], 8);
        assert_eq!(json["data"]["attendance"]["total"], 10);
        assert_eq!(json["data"]["attendance"]["percentage"], 80);
        assert_eq!(json["data"]["student"]["class_name"], "Nine");
    }

    #[actix_web::test]
    async fn test_application_defaults_to_admin_and_pending() {
        let storage = memory_storage().await;
        storage.create_student(ahmed(None)).await.unwrap();

        let (data, form_cfg, ..) = app_data(&storage);
        let app = test::init_service(
            App::new()
                .app_data(data)
                .app_data(form_cfg)
                .configure(configure_student_routes),
        )
        .await;
        let cookie = session_for(&storage, "ahmed@school.com", UserRole::Student).await;

        let req = test::TestRequest::post()
            .uri("/student/applications")
            .cookie(cookie.clone())
            .set_form([("subject", "Sick leave"), ("details", ""), ("send_to", "")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let req = test::TestRequest::get()
            .uri("/student/applications")
            .cookie(cookie)
            .to_request();
        let json = json_body(test::call_service(&app, req).await).await;
        assert_eq!(json["data"][0]["send_to"], "Admin");
        assert_eq!(json["data"][0]["status"], "Pending");
        assert!(json["data"][0]["details"].is_null());
    }

    #[actix_web::test]
    async fn test_unclassed_student_sees_no_materials() {
        let storage = memory_storage().await;
        storage.create_student(ahmed(None)).await.unwrap();

        let (data, ..) = app_data(&storage);
        let app =
            test::init_service(App::new().app_data(data).configure(configure_student_routes))
                .await;
        let cookie = session_for(&storage, "ahmed@school.com", UserRole::Student).await;

        for uri in ["/student/materials", "/student/qa"] {
            let req = test::TestRequest::get().uri(uri).cookie(cookie.clone()).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get()
            .uri("/student/materials")
            .cookie(cookie)
            .to_request();
        let json = json_body(test::call_service(&app, req).await).await;
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_teacher_cannot_open_student_portal() {
        let storage = memory_storage().await;
        let (data, ..) = app_data(&storage);
        let app =
            test::init_service(App::new().app_data(data).configure(configure_student_routes))
                .await;
        let cookie = session_for(&storage, "ali@school.com", UserRole::Teacher).await;

        let req = test::TestRequest::get()
            .uri("/student/marks")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
