use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TeacherService, resolve_teacher_id};
use crate::models::{auth::entities::SessionContext, qa::requests::AnswerQuestionForm};
use crate::services::internal_error;
use crate::utils::flash::{Flash, redirect_with_flash};
use crate::utils::{redirect_success, render_view};

const QA_PATH: &str = "/teacher/qa";

pub async fn list_questions(
    service: &TeacherService,
    request: &HttpRequest,
    session: &SessionContext,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let teacher_id = match resolve_teacher_id(&storage, session).await {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    match storage.list_questions_for_teacher(teacher_id).await {
        Ok(list) => Ok(render_view(request, Some(list))),
        Err(e) => Ok(internal_error("Failed to list questions", e)),
    }
}

/// 只能回答发给自己的问题
pub async fn answer_question(
    service: &TeacherService,
    request: &HttpRequest,
    session: &SessionContext,
    form: AnswerQuestionForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let teacher_id = match resolve_teacher_id(&storage, session).await {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    match storage
        .answer_question(teacher_id, form.qa_id, form.answer.trim())
        .await
    {
        Ok(true) => Ok(redirect_success(QA_PATH, "Answer submitted!")),
        Ok(false) => Ok(redirect_with_flash(
            QA_PATH,
            Flash::warning("Question not found."),
        )),
        Err(e) => Ok(internal_error("Answer submission failed", e)),
    }
}
