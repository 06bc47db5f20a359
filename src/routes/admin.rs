use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireRole, RequireSession};
use crate::models::{
    announcements::requests::AnnouncementForm,
    auth::entities::SessionContext,
    classes::requests::ClassForm,
    fees::requests::FeeForm,
    students::requests::{CreateStudentForm, UpdateStudentForm},
    subjects::requests::SubjectForm,
    teacher_subjects::requests::AssignSubjectForm,
    teachers::requests::{CreateTeacherForm, UpdateTeacherForm},
    users::{entities::UserRole, requests::AddUserForm},
    vouchers::requests::{GenerateVoucherForm, VoucherSearchQuery},
};
use crate::services::AdminService;

// 懒加载的全局 AdminService 实例
static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);

pub async fn dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.dashboard(&req).await
}

// 学生
pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_students(&req).await
}

pub async fn add_student_view(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.student_form(&req, None).await
}

pub async fn create_student(
    req: HttpRequest,
    form: web::Form<CreateStudentForm>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.create_student(&req, form.into_inner()).await
}

pub async fn edit_student_view(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.student_form(&req, Some(id.into_inner())).await
}

pub async fn update_student(
    req: HttpRequest,
    id: web::Path<i64>,
    form: web::Form<UpdateStudentForm>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .update_student(&req, id.into_inner(), form.into_inner())
        .await
}

pub async fn delete_student(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.delete_student(&req, id.into_inner()).await
}

// 教师
pub async fn list_teachers(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_teachers(&req).await
}

pub async fn add_teacher_view(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.teacher_form(&req, None).await
}

pub async fn create_teacher(
    req: HttpRequest,
    form: web::Form<CreateTeacherForm>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.create_teacher(&req, form.into_inner()).await
}

pub async fn edit_teacher_view(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.teacher_form(&req, Some(id.into_inner())).await
}

pub async fn update_teacher(
    req: HttpRequest,
    id: web::Path<i64>,
    form: web::Form<UpdateTeacherForm>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .update_teacher(&req, id.into_inner(), form.into_inner())
        .await
}

pub async fn delete_teacher(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.delete_teacher(&req, id.into_inner()).await
}

// 班级
pub async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_classes(&req).await
}

pub async fn create_class(
    req: HttpRequest,
    form: web::Form<ClassForm>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.create_class(&req, form.into_inner()).await
}

pub async fn edit_class_view(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.class_form(&req, id.into_inner()).await
}

pub async fn update_class(
    req: HttpRequest,
    id: web::Path<i64>,
    form: web::Form<ClassForm>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .update_class(&req, id.into_inner(), form.into_inner())
        .await
}

pub async fn delete_class(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.delete_class(&req, id.into_inner()).await
}

// 科目
pub async fn list_subjects(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_subjects(&req).await
}

pub async fn create_subject(
    req: HttpRequest,
    form: web::Form<SubjectForm>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.create_subject(&req, form.into_inner()).await
}

pub async fn edit_subject_view(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.subject_form(&req, id.into_inner()).await
}

pub async fn update_subject(
    req: HttpRequest,
    id: web::Path<i64>,
    form: web::Form<SubjectForm>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .update_subject(&req, id.into_inner(), form.into_inner())
        .await
}

pub async fn delete_subject(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.delete_subject(&req, id.into_inner()).await
}

// 授课分配
pub async fn assignment_view(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.assignment_view(&req).await
}

pub async fn assign_subject(
    req: HttpRequest,
    form: web::Form<AssignSubjectForm>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.assign_subject(&req, form.into_inner()).await
}

pub async fn delete_assignment(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.delete_assignment(&req, id.into_inner()).await
}

// 公告
pub async fn list_announcements(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_announcements(&req).await
}

pub async fn create_announcement(
    req: HttpRequest,
    session: SessionContext,
    form: web::Form<AnnouncementForm>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .create_announcement(&req, &session, form.into_inner())
        .await
}

pub async fn delete_announcement(
    req: HttpRequest,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.delete_announcement(&req, id.into_inner()).await
}

// 申请审批
pub async fn list_applications(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_applications(&req).await
}

pub async fn application_action(
    req: HttpRequest,
    path: web::Path<(i64, String)>,
) -> ActixResult<HttpResponse> {
    let (id, action) = path.into_inner();
    ADMIN_SERVICE.application_action(&req, id, &action).await
}

// 学费
pub async fn fees_view(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.fees_view(&req).await
}

pub async fn create_fee(req: HttpRequest, form: web::Form<FeeForm>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.create_fee(&req, form.into_inner()).await
}

pub async fn edit_fee_view(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.fee_form(&req, id.into_inner()).await
}

pub async fn update_fee(
    req: HttpRequest,
    id: web::Path<i64>,
    form: web::Form<FeeForm>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .update_fee(&req, id.into_inner(), form.into_inner())
        .await
}

pub async fn delete_fee(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.delete_fee(&req, id.into_inner()).await
}

// 缴费单
pub async fn search_voucher(
    req: HttpRequest,
    query: web::Query<VoucherSearchQuery>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.search_voucher(&req, query.into_inner()).await
}

pub async fn generate_voucher(
    req: HttpRequest,
    form: web::Form<GenerateVoucherForm>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.generate_voucher(&req, form.into_inner()).await
}

pub async fn view_voucher(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.view_voucher(&req, id.into_inner()).await
}

// 管理员账号
pub async fn add_user_view(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.add_user_view(&req).await
}

pub async fn add_user(req: HttpRequest, form: web::Form<AddUserForm>) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.add_user(&req, form.into_inner()).await
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(RequireRole::new(UserRole::Admin))
            .wrap(RequireSession)
            .route("", web::get().to(dashboard))
            // 学生
            .route("/students", web::get().to(list_students))
            .service(
                web::resource("/students/add")
                    .route(web::get().to(add_student_view))
                    .route(web::post().to(create_student)),
            )
            .service(
                web::resource("/students/edit/{id}")
                    .route(web::get().to(edit_student_view))
                    .route(web::post().to(update_student)),
            )
            .service(
                web::resource("/students/delete/{id}")
                    .route(web::get().to(delete_student))
                    .route(web::post().to(delete_student)),
            )
            // 教师
            .route("/teachers", web::get().to(list_teachers))
            .service(
                web::resource("/teachers/add")
                    .route(web::get().to(add_teacher_view))
                    .route(web::post().to(create_teacher)),
            )
            .service(
                web::resource("/teachers/edit/{id}")
                    .route(web::get().to(edit_teacher_view))
                    .route(web::post().to(update_teacher)),
            )
            .service(
                web::resource("/teachers/delete/{id}")
                    .route(web::get().to(delete_teacher))
                    .route(web::post().to(delete_teacher)),
            )
            // 班级
            .route("/classes", web::get().to(list_classes))
            .route("/classes/add", web::post().to(create_class))
            .service(
                web::resource("/classes/edit/{id}")
                    .route(web::get().to(edit_class_view))
                    .route(web::post().to(update_class)),
            )
            .service(
                web::resource("/classes/delete/{id}")
                    .route(web::get().to(delete_class))
                    .route(web::post().to(delete_class)),
            )
            // 科目
            .route("/subjects", web::get().to(list_subjects))
            .route("/subjects/add", web::post().to(create_subject))
            .service(
                web::resource("/subjects/edit/{id}")
                    .route(web::get().to(edit_subject_view))
                    .route(web::post().to(update_subject)),
            )
            .service(
                web::resource("/subjects/delete/{id}")
                    .route(web::get().to(delete_subject))
                    .route(web::post().to(delete_subject)),
            )
            // 授课分配
            .service(
                web::resource("/assign-subject")
                    .route(web::get().to(assignment_view))
                    .route(web::post().to(assign_subject)),
            )
            .service(
                web::resource("/assign-subject/delete/{id}")
                    .route(web::get().to(delete_assignment))
                    .route(web::post().to(delete_assignment)),
            )
            // 公告
            .service(
                web::resource("/announcements")
                    .route(web::get().to(list_announcements))
                    .route(web::post().to(create_announcement)),
            )
            .service(
                web::resource("/announcements/delete/{id}")
                    .route(web::get().to(delete_announcement))
                    .route(web::post().to(delete_announcement)),
            )
            // 申请审批
            .route("/applications", web::get().to(list_applications))
            .service(
                web::resource("/applications/action/{id}/{action}")
                    .route(web::get().to(application_action))
                    .route(web::post().to(application_action)),
            )
            // 学费
            .service(
                web::resource("/fees")
                    .route(web::get().to(fees_view))
                    .route(web::post().to(create_fee)),
            )
            .service(
                web::resource("/fees/edit/{id}")
                    .route(web::get().to(edit_fee_view))
                    .route(web::post().to(update_fee)),
            )
            .service(
                web::resource("/fees/delete/{id}")
                    .route(web::get().to(delete_fee))
                    .route(web::post().to(delete_fee)),
            )
            // 缴费单
            .service(
                web::resource("/voucher")
                    .route(web::get().to(search_voucher))
                    .route(web::post().to(generate_voucher)),
            )
            .route("/voucher/view/{id}", web::get().to(view_voucher))
            // 管理员账号
            .service(
                web::resource("/add-user")
                    .route(web::get().to(add_user_view))
                    .route(web::post().to(add_user)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::requests::CreateStudent;
    use crate::routes::test_support::{app_data, memory_storage, session_for};
    use actix_web::http::{StatusCode, header::LOCATION};
    use actix_web::{App, body::to_bytes, test};

    async fn json_body(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn location(resp: &actix_web::dev::ServiceResponse) -> Option<String> {
        resp.headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[actix_web::test]
    async fn test_admin_scope_requires_session_and_role() {
        let storage = memory_storage().await;
        let (data, ..) = app_data(&storage);
        let app =
            test::init_service(App::new().app_data(data).configure(configure_admin_routes)).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp).as_deref(), Some("/login"));

        let cookie = session_for(&storage, "student@school.com", UserRole::Student).await;
        let req = test::TestRequest::get()
            .uri("/admin/classes")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(json_body(resp).await["message"], "Access denied.");
    }

    #[actix_web::test]
    async fn test_class_crud_and_duplicate() {
        let storage = memory_storage().await;
        let (data, form_cfg, query_cfg, path_cfg) = app_data(&storage);
        let app = test::init_service(
            App::new()
                .app_data(data)
                .app_data(form_cfg)
                .app_data(query_cfg)
                .app_data(path_cfg)
                .configure(configure_admin_routes),
        )
        .await;
        let cookie = session_for(&storage, "admin@ssss.com", UserRole::Admin).await;

        let req = test::TestRequest::post()
            .uri("/admin/classes/add")
            .cookie(cookie.clone())
            .set_form([("class_name", "Nine")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp).as_deref(), Some("/admin/classes"));

        let req = test::TestRequest::post()
            .uri("/admin/classes/add")
            .cookie(cookie.clone())
            .set_form([("class_name", "Nine")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(json_body(resp).await["message"], "Class already exists.");

        let req = test::TestRequest::get()
            .uri("/admin/classes")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["data"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["data"][0]["class_name"], "Nine");
    }

    #[actix_web::test]
    async fn test_application_action_rules() {
        let storage = memory_storage().await;
        let student = storage
            .create_student(CreateStudent {
                name: "Ahmed Khan".to_string(),
                email: "ahmed@school.com".to_string(),
                password_hash: String::new(),
                dob: None,
                gender: None,
                address: None,
                parent_name: None,
                parent_cnic: None,
                phone: None,
                class_id: None,
                roll_number: None,
            })
            .await
            .unwrap();
        let application = storage
            .create_application(
                student.id,
                crate::models::applications::requests::ApplicationForm {
                    subject: "Leave".to_string(),
                    details: None,
                    send_to: None,
                },
            )
            .await
            .unwrap();

        let (data, ..) = app_data(&storage);
        let app =
            test::init_service(App::new().app_data(data).configure(configure_admin_routes)).await;
        let cookie = session_for(&storage, "admin@ssss.com", UserRole::Admin).await;

        let req = test::TestRequest::get()
            .uri(&format!("/admin/applications/action/{}/archive", application.id))
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri(&format!("/admin/applications/action/{}/approve", application.id))
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let flash = resp.response().cookies().next().unwrap();
        assert_eq!(flash.value(), "success|Application Approved!");

        // 已审批的申请不能再驳回
        let req = test::TestRequest::post()
            .uri(&format!("/admin/applications/action/{}/reject", application.id))
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let flash = resp.response().cookies().next().unwrap();
        assert_eq!(flash.value(), "warning|Application is not pending.");

        let list = storage.list_applications_by_student(student.id).await.unwrap();
        assert_eq!(
            list[0].status,
            crate::models::applications::entities::ApplicationStatus::Approved
        );
    }

    #[actix_web::test]
    async fn test_voucher_generation_redirects_to_detail() {
        let storage = memory_storage().await;
        let (data, form_cfg, ..) = app_data(&storage);
        let app = test::init_service(
            App::new()
                .app_data(data)
                .app_data(form_cfg)
                .configure(configure_admin_routes),
        )
        .await;
        let cookie = session_for(&storage, "admin@ssss.com", UserRole::Admin).await;

        let req = test::TestRequest::post()
            .uri("/admin/voucher")
            .cookie(cookie.clone())
            .set_form([
                ("student_id", "1"),
                ("roll_number", "1001"),
                ("base_amount", "5000"),
                ("transport", "300"),
                ("sports", "200"),
                ("discount", "500"),
                ("till_date", ""),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let target = location(&resp).unwrap();
        assert!(target.starts_with("/admin/voucher/view/"));

        let req = test::TestRequest::get()
            .uri(&target)
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["data"]["total_payable"], 5000.0);
        assert!(json["data"]["student_name"].is_null());
    }

    #[actix_web::test]
    async fn test_registered_email_is_trimmed_for_login() {
        let storage = memory_storage().await;
        let (data, form_cfg, ..) = app_data(&storage);
        let app = test::init_service(
            App::new()
                .app_data(data)
                .app_data(form_cfg)
                .configure(crate::routes::configure_auth_routes)
                .configure(configure_admin_routes),
        )
        .await;
        let cookie = session_for(&storage, "admin@ssss.com", UserRole::Admin).await;

        let req = test::TestRequest::post()
            .uri("/admin/students/add")
            .cookie(cookie)
            .set_form([
                ("name", "Zed Ali"),
                ("email", " zed@school.com "),
                ("password", "zed12345"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let user = storage.get_user_by_email("zed@school.com").await.unwrap();
        assert!(user.is_some());

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", " zed@school.com "), ("password", "zed12345")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp).as_deref(), Some("/student"));
    }

    #[actix_web::test]
    async fn test_announcement_dates_are_validated() {
        let storage = memory_storage().await;
        let (data, form_cfg, ..) = app_data(&storage);
        let app = test::init_service(
            App::new()
                .app_data(data)
                .app_data(form_cfg)
                .configure(configure_admin_routes),
        )
        .await;
        let cookie = session_for(&storage, "admin@ssss.com", UserRole::Admin).await;

        let req = test::TestRequest::post()
            .uri("/admin/announcements")
            .cookie(cookie.clone())
            .set_form([
                ("title", "Sports day"),
                ("start_date", "2026-8-20"),
                ("end_date", "2026-9-1"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let list = storage.list_announcements(None).await.unwrap();
        assert_eq!(list[0].end_date.as_deref(), Some("2026-09-01"));
        // 已过期的公告不再出现在首页
        let active = storage.list_active_announcements("2026-10-19", 5).await.unwrap();
        assert!(active.is_empty());

        for bad in ["01/09/2026", "2026-13-01"] {
            let req = test::TestRequest::post()
                .uri("/admin/announcements")
                .cookie(cookie.clone())
                .set_form([("title", "Exam week"), ("end_date", bad)])
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
        assert_eq!(storage.list_announcements(None).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_invalid_dob_is_bad_request() {
        let storage = memory_storage().await;
        let (data, form_cfg, ..) = app_data(&storage);
        let app = test::init_service(
            App::new()
                .app_data(data)
                .app_data(form_cfg)
                .configure(configure_admin_routes),
        )
        .await;
        let cookie = session_for(&storage, "admin@ssss.com", UserRole::Admin).await;

        let req = test::TestRequest::post()
            .uri("/admin/teachers/add")
            .cookie(cookie)
            .set_form([
                ("name", "Hina Shah"),
                ("email", "hina@school.com"),
                ("password", "hina12345"),
                ("dob", "12-05-1990"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(storage.get_user_by_email("hina@school.com").await.unwrap().is_none());
    }
}
