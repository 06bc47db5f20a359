use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, resolve_student};
use crate::models::{
    auth::entities::SessionContext,
    qa::{requests::AskQuestionForm, responses::StudentQaView},
};
use crate::services::internal_error;
use crate::utils::{redirect_success, render_view};

/// 本班任课教师（教师+科目去重）与自己的提问
pub async fn qa_view(
    service: &StudentService,
    request: &HttpRequest,
    session: &SessionContext,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let identity = match resolve_student(&storage, session).await {
        Ok(identity) => identity,
        Err(resp) => return Ok(resp),
    };

    let teachers = match identity.class_id {
        Some(class_id) => match storage.list_class_teachers(class_id).await {
            Ok(list) => list,
            Err(e) => return Ok(internal_error("Failed to list class teachers", e)),
        },
        None => Vec::new(),
    };
    let questions = match storage.list_questions_for_student(identity.student_id).await {
        Ok(list) => list,
        Err(e) => return Ok(internal_error("Failed to list questions", e)),
    };

    Ok(render_view(
        request,
        Some(StudentQaView {
            teachers,
            questions,
        }),
    ))
}

pub async fn ask_question(
    service: &StudentService,
    request: &HttpRequest,
    session: &SessionContext,
    form: AskQuestionForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let identity = match resolve_student(&storage, session).await {
        Ok(identity) => identity,
        Err(resp) => return Ok(resp),
    };

    match storage.create_question(identity.student_id, form).await {
        Ok(_) => Ok(redirect_success("/student/qa", "Question submitted!")),
        Err(e) => Ok(internal_error("Question submission failed", e)),
    }
}
