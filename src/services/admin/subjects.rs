use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::subjects::{
    requests::SubjectForm,
    responses::{SubjectEditView, SubjectListView},
};
use crate::services::internal_error;
use crate::utils::{redirect_success, render_view};

const SUBJECTS_PATH: &str = "/admin/subjects";

pub async fn list_subjects(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let subjects = match storage.list_subjects_with_class().await {
        Ok(subjects) => subjects,
        Err(e) => return Ok(internal_error("Failed to list subjects", e)),
    };
    let classes = match storage.list_classes().await {
        Ok(classes) => classes,
        Err(e) => return Ok(internal_error("Failed to list classes", e)),
    };

    Ok(render_view(request, Some(SubjectListView { subjects, classes })))
}

pub async fn subject_form(
    service: &AdminService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let subject = match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => return Ok(render_view::<SubjectEditView>(request, None)),
        Err(e) => return Ok(internal_error("Failed to get subject", e)),
    };
    let classes = match storage.list_classes().await {
        Ok(classes) => classes,
        Err(e) => return Ok(internal_error("Failed to list classes", e)),
    };

    Ok(render_view(request, Some(SubjectEditView { subject, classes })))
}

pub async fn create_subject(
    service: &AdminService,
    request: &HttpRequest,
    form: SubjectForm,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).create_subject(form).await {
        Ok(_) => Ok(redirect_success(SUBJECTS_PATH, "Subject added!")),
        Err(e) => Ok(internal_error("Subject creation failed", e)),
    }
}

pub async fn update_subject(
    service: &AdminService,
    request: &HttpRequest,
    subject_id: i64,
    form: SubjectForm,
) -> ActixResult<HttpResponse> {
    match service
        .get_storage(request)
        .update_subject(subject_id, form)
        .await
    {
        Ok(_) => Ok(redirect_success(SUBJECTS_PATH, "Subject updated!")),
        Err(e) => Ok(internal_error("Subject update failed", e)),
    }
}

pub async fn delete_subject(
    service: &AdminService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).delete_subject(subject_id).await {
        Ok(_) => Ok(redirect_success(SUBJECTS_PATH, "Subject deleted.")),
        Err(e) => Ok(internal_error("Subject deletion failed", e)),
    }
}
