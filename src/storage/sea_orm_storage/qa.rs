//! 问答存储操作

use super::SeaOrmStorage;
use crate::entity::qa::{ActiveModel, Column, Entity as Qa};
use crate::errors::{Result, SchoolError};
use crate::models::qa::{
    entities::QaThread,
    requests::AskQuestionForm,
    responses::{StudentQuestionItem, TeacherQuestionItem},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 学生提问
    pub async fn create_question_impl(
        &self,
        student_id: i64,
        req: AskQuestionForm,
    ) -> Result<QaThread> {
        let model = ActiveModel {
            student_id: Set(student_id),
            teacher_id: Set(req.teacher_id),
            subject_id: Set(req.subject_id),
            question: Set(req.question),
            answer: Set(None),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交问题失败: {e}")))?;

        Ok(result.into_thread())
    }

    /// 教师收到的问题（最新在前）
    pub async fn list_questions_for_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherQuestionItem>> {
        let rows = Qa::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询问题列表失败: {e}")))?;

        let students = self.students_by_id(rows.iter().map(|r| r.student_id)).await?;
        let subject_names = self
            .subject_names(rows.iter().filter_map(|r| r.subject_id))
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let student_name = students.get(&r.student_id).map(|s| s.name.clone());
                let subject_name = r.subject_id.and_then(|id| subject_names.get(&id).cloned());
                TeacherQuestionItem {
                    thread: r.into_thread(),
                    student_name,
                    subject_name,
                }
            })
            .collect())
    }

    /// 学生本人的问题（最新在前）
    pub async fn list_questions_for_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentQuestionItem>> {
        let rows = Qa::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询问题列表失败: {e}")))?;

        let teacher_names = self.teacher_names(rows.iter().map(|r| r.teacher_id)).await?;
        let subject_names = self
            .subject_names(rows.iter().filter_map(|r| r.subject_id))
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let teacher_name = teacher_names.get(&r.teacher_id).cloned();
                let subject_name = r.subject_id.and_then(|id| subject_names.get(&id).cloned());
                StudentQuestionItem {
                    thread: r.into_thread(),
                    teacher_name,
                    subject_name,
                }
            })
            .collect())
    }

    /// 回答问题，仅限提问对象本人；返回是否命中
    pub async fn answer_question_impl(
        &self,
        teacher_id: i64,
        qa_id: i64,
        answer: &str,
    ) -> Result<bool> {
        let result = Qa::update_many()
            .col_expr(Column::Answer, Expr::value(answer))
            .filter(Column::Id.eq(qa_id))
            .filter(Column::TeacherId.eq(teacher_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("回答问题失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 教师未回答的问题数
    pub async fn count_unanswered_questions_impl(&self, teacher_id: i64) -> Result<u64> {
        Qa::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::Answer.is_null())
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计未回答问题失败: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(teacher_id: i64, question: &str) -> AskQuestionForm {
        AskQuestionForm {
            teacher_id,
            subject_id: None,
            question: question.into(),
        }
    }

    #[tokio::test]
    async fn test_answer_scoped_to_teacher() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let thread = storage
            .create_question_impl(5, ask(1, "When is the test?"))
            .await
            .unwrap();
        assert!(thread.answer.is_none());
        assert_eq!(storage.count_unanswered_questions_impl(1).await.unwrap(), 1);

        // 其他教师无法回答
        assert!(
            !storage
                .answer_question_impl(2, thread.id, "Friday")
                .await
                .unwrap()
        );
        assert!(
            storage
                .answer_question_impl(1, thread.id, "Monday")
                .await
                .unwrap()
        );
        assert_eq!(storage.count_unanswered_questions_impl(1).await.unwrap(), 0);

        let mine = storage.list_questions_for_student_impl(5).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].thread.answer.as_deref(), Some("Monday"));
        assert!(mine[0].teacher_name.is_none());
    }

    #[tokio::test]
    async fn test_teacher_inbox_only_lists_own_questions() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        storage.create_question_impl(5, ask(1, "Q1")).await.unwrap();
        storage.create_question_impl(6, ask(2, "Q2")).await.unwrap();
        storage.create_question_impl(7, ask(1, "Q3")).await.unwrap();

        let inbox = storage.list_questions_for_teacher_impl(1).await.unwrap();
        let questions: Vec<_> = inbox.iter().map(|q| q.thread.question.as_str()).collect();
        assert_eq!(questions, vec!["Q3", "Q1"]);
    }
}
