use std::sync::Arc;

use crate::models::{
    announcements::{entities::Announcement, requests::CreateAnnouncement},
    applications::{
        entities::{Application, ApplicationAction},
        requests::ApplicationForm,
        responses::ApplicationWithStudent,
    },
    attendance::{
        entities::AttendanceSummary, requests::AttendanceSubmission,
        responses::AttendanceWithSubject,
    },
    classes::entities::Class,
    dashboard::responses::AdminStats,
    fees::{entities::Fee, requests::FeeForm, responses::FeeWithClass},
    lectures::{entities::Lecture, requests::CreateLecture, responses::LectureWithNames},
    marks::{entities::MarkRecord, requests::MarksSubmission, responses::MarkWithSubject},
    qa::{
        entities::QaThread,
        requests::AskQuestionForm,
        responses::{ClassTeacherOption, StudentQuestionItem, TeacherQuestionItem},
    },
    students::{
        entities::{Student, StudentIdentity},
        requests::{CreateStudent, UpdateStudentForm},
        responses::StudentWithClass,
    },
    subjects::{entities::Subject, requests::SubjectForm, responses::SubjectListItem},
    teacher_subjects::{
        entities::TeacherSubject, requests::AssignSubjectForm, responses::AssignmentDetail,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacher, UpdateTeacherForm},
    },
    users::{entities::User, requests::CreateUser},
    vouchers::{entities::Voucher, requests::CreateVoucher, responses::VoucherDetail},
};
use crate::errors::Result;

pub mod sea_orm_storage;

/// 数据访问接口
///
/// 按 ID 查询不到时返回 `None`；删除/更新不存在的记录返回 `false`/`None`，
/// 不视为错误。唯一约束冲突返回 `SchoolError::Conflict`。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    // 用户模块
    async fn create_user(&self, user: CreateUser) -> Result<User>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn count_users(&self) -> Result<u64>;

    // 班级模块
    async fn create_class(&self, class_name: &str) -> Result<Class>;
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    async fn list_classes(&self) -> Result<Vec<Class>>;
    async fn update_class(&self, class_id: i64, class_name: &str) -> Result<Option<Class>>;
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    // 科目模块
    async fn create_subject(&self, subject: SubjectForm) -> Result<Subject>;
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    async fn list_subjects_with_class(&self) -> Result<Vec<SubjectListItem>>;
    async fn update_subject(
        &self,
        subject_id: i64,
        update: SubjectForm,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, subject_id: i64) -> Result<bool>;

    // 学生模块
    async fn create_student(&self, student: CreateStudent) -> Result<Student>;
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    async fn get_student_with_class(&self, student_id: i64) -> Result<Option<StudentWithClass>>;
    async fn get_student_by_roll_number(
        &self,
        roll_number: &str,
    ) -> Result<Option<StudentWithClass>>;
    async fn find_student_identity_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StudentIdentity>>;
    async fn list_students_with_class(&self) -> Result<Vec<StudentWithClass>>;
    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>>;
    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentForm,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, student_id: i64) -> Result<bool>;

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacher) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>>;
    async fn find_teacher_id_by_email(&self, email: &str) -> Result<Option<i64>>;
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    async fn update_teacher(
        &self,
        teacher_id: i64,
        update: UpdateTeacherForm,
    ) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, teacher_id: i64) -> Result<bool>;

    // 授课分配模块
    async fn assign_subject(&self, assignment: AssignSubjectForm) -> Result<TeacherSubject>;
    async fn list_assignments(&self, teacher_id: Option<i64>) -> Result<Vec<AssignmentDetail>>;
    async fn teacher_has_assignment(
        &self,
        teacher_id: i64,
        class_id: i64,
        subject_id: i64,
    ) -> Result<bool>;
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;
    async fn list_class_teachers(&self, class_id: i64) -> Result<Vec<ClassTeacherOption>>;

    // 公告模块
    async fn create_announcement(&self, announcement: CreateAnnouncement) -> Result<Announcement>;
    async fn list_announcements(&self, created_by: Option<i64>) -> Result<Vec<Announcement>>;
    async fn list_recent_announcements(&self, limit: u64) -> Result<Vec<Announcement>>;
    async fn list_active_announcements(
        &self,
        today: &str,
        limit: u64,
    ) -> Result<Vec<Announcement>>;
    async fn delete_announcement(&self, announcement_id: i64) -> Result<bool>;

    // 考勤模块
    async fn upsert_attendance(&self, submission: &AttendanceSubmission) -> Result<usize>;
    async fn list_attendance_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<AttendanceWithSubject>>;
    async fn attendance_summary(&self, student_id: i64) -> Result<AttendanceSummary>;

    // 成绩模块
    async fn upsert_marks(&self, submission: &MarksSubmission) -> Result<usize>;
    async fn list_marks(
        &self,
        class_id: i64,
        subject_id: i64,
        exam_type: &str,
    ) -> Result<Vec<MarkRecord>>;
    async fn list_marks_for_student(&self, student_id: i64) -> Result<Vec<MarkWithSubject>>;

    // 课程资料模块
    async fn create_lecture(&self, lecture: CreateLecture) -> Result<Lecture>;
    async fn list_lectures_by_teacher(&self, teacher_id: i64) -> Result<Vec<LectureWithNames>>;
    async fn list_lectures_by_class(&self, class_id: i64) -> Result<Vec<LectureWithNames>>;
    async fn count_lectures_by_teacher(&self, teacher_id: i64) -> Result<u64>;

    // 申请模块
    async fn create_application(
        &self,
        student_id: i64,
        application: ApplicationForm,
    ) -> Result<Application>;
    async fn list_applications_with_student(&self) -> Result<Vec<ApplicationWithStudent>>;
    async fn list_applications_by_student(&self, student_id: i64) -> Result<Vec<Application>>;
    async fn transition_application(
        &self,
        application_id: i64,
        action: ApplicationAction,
    ) -> Result<bool>;
    async fn count_pending_applications_by_student(&self, student_id: i64) -> Result<u64>;

    // 学费模块
    async fn create_fee(&self, fee: FeeForm) -> Result<Fee>;
    async fn get_fee_by_id(&self, fee_id: i64) -> Result<Option<Fee>>;
    async fn get_fee_by_class(&self, class_id: i64) -> Result<Option<Fee>>;
    async fn list_fees_with_class(&self) -> Result<Vec<FeeWithClass>>;
    async fn update_fee(&self, fee_id: i64, update: FeeForm) -> Result<Option<Fee>>;
    async fn delete_fee(&self, fee_id: i64) -> Result<bool>;

    // 缴费单模块
    async fn create_voucher(&self, voucher: CreateVoucher) -> Result<Voucher>;
    async fn get_voucher_detail(&self, voucher_id: i64) -> Result<Option<VoucherDetail>>;

    // 问答模块
    async fn create_question(&self, student_id: i64, question: AskQuestionForm) -> Result<QaThread>;
    async fn list_questions_for_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherQuestionItem>>;
    async fn list_questions_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentQuestionItem>>;
    async fn answer_question(&self, teacher_id: i64, qa_id: i64, answer: &str) -> Result<bool>;
    async fn count_unanswered_questions(&self, teacher_id: i64) -> Result<u64>;

    // 统计
    async fn admin_stats(&self) -> Result<AdminStats>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
