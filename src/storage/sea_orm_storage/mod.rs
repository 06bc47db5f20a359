//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod applications;
mod attendance;
mod classes;
mod dashboard;
mod fees;
mod lectures;
mod lookups;
mod marks;
mod qa;
mod students;
mod subjects;
mod teacher_subjects;
mod teachers;
mod users;
mod vouchers;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

/// 写操作错误转换：唯一约束冲突归为 `Conflict`，其余归为数据库操作错误
pub(crate) fn write_error(context: &'static str) -> impl Fn(DbErr) -> SchoolError {
    move |e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            SchoolError::conflict(format!("{context}: {detail}"))
        }
        _ => SchoolError::database_operation(format!("{context}: {e}")),
    }
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Self::migrate(&db).await?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 运行迁移
    async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None)
            .await
            .map_err(|e| SchoolError::database_operation(format!("数据库迁移失败: {e}")))
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") || url.starts_with("sqlite::memory:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 单连接的内存 SQLite，测试用
    #[cfg(test)]
    pub(crate) async fn new_in_memory() -> Result<Self> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .map_err(|e| SchoolError::database_connection(format!("无法连接到数据库: {e}")))?;
        Self::migrate(&db).await?;

        Ok(Self { db })
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 班级模块
    async fn create_class(&self, class_name: &str) -> Result<Class> {
        self.create_class_impl(class_name).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    async fn update_class(&self, class_id: i64, class_name: &str) -> Result<Option<Class>> {
        self.update_class_impl(class_id, class_name).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 科目模块
    async fn create_subject(&self, subject: SubjectForm) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(subject_id).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn list_subjects_with_class(&self) -> Result<Vec<SubjectListItem>> {
        self.list_subjects_with_class_impl().await
    }

    async fn update_subject(
        &self,
        subject_id: i64,
        update: SubjectForm,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(subject_id, update).await
    }

    async fn delete_subject(&self, subject_id: i64) -> Result<bool> {
        self.delete_subject_impl(subject_id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudent) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(student_id).await
    }

    async fn get_student_with_class(&self, student_id: i64) -> Result<Option<StudentWithClass>> {
        self.get_student_with_class_impl(student_id).await
    }

    async fn get_student_by_roll_number(
        &self,
        roll_number: &str,
    ) -> Result<Option<StudentWithClass>> {
        self.get_student_by_roll_number_impl(roll_number).await
    }

    async fn find_student_identity_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StudentIdentity>> {
        self.find_student_identity_by_email_impl(email).await
    }

    async fn list_students_with_class(&self) -> Result<Vec<StudentWithClass>> {
        self.list_students_with_class_impl().await
    }

    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_class_impl(class_id).await
    }

    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentForm,
    ) -> Result<Option<Student>> {
        self.update_student_impl(student_id, update).await
    }

    async fn delete_student(&self, student_id: i64) -> Result<bool> {
        self.delete_student_impl(student_id).await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacher) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(teacher_id).await
    }

    async fn find_teacher_id_by_email(&self, email: &str) -> Result<Option<i64>> {
        self.find_teacher_id_by_email_impl(email).await
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    async fn update_teacher(
        &self,
        teacher_id: i64,
        update: UpdateTeacherForm,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(teacher_id, update).await
    }

    async fn delete_teacher(&self, teacher_id: i64) -> Result<bool> {
        self.delete_teacher_impl(teacher_id).await
    }

    // 授课分配模块
    async fn assign_subject(&self, assignment: AssignSubjectForm) -> Result<TeacherSubject> {
        self.assign_subject_impl(assignment).await
    }

    async fn list_assignments(&self, teacher_id: Option<i64>) -> Result<Vec<AssignmentDetail>> {
        self.list_assignments_impl(teacher_id).await
    }

    async fn teacher_has_assignment(
        &self,
        teacher_id: i64,
        class_id: i64,
        subject_id: i64,
    ) -> Result<bool> {
        self.teacher_has_assignment_impl(teacher_id, class_id, subject_id)
            .await
    }

    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.delete_assignment_impl(assignment_id).await
    }

    async fn list_class_teachers(&self, class_id: i64) -> Result<Vec<ClassTeacherOption>> {
        self.list_class_teachers_impl(class_id).await
    }

    // 公告模块
    async fn create_announcement(&self, announcement: CreateAnnouncement) -> Result<Announcement> {
        self.create_announcement_impl(announcement).await
    }

    async fn list_announcements(&self, created_by: Option<i64>) -> Result<Vec<Announcement>> {
        self.list_announcements_impl(created_by).await
    }

    async fn list_recent_announcements(&self, limit: u64) -> Result<Vec<Announcement>> {
        self.list_recent_announcements_impl(limit).await
    }

    async fn list_active_announcements(
        &self,
        today: &str,
        limit: u64,
    ) -> Result<Vec<Announcement>> {
        self.list_active_announcements_impl(today, limit).await
    }

    async fn delete_announcement(&self, announcement_id: i64) -> Result<bool> {
        self.delete_announcement_impl(announcement_id).await
    }

    // 考勤模块
    async fn upsert_attendance(&self, submission: &AttendanceSubmission) -> Result<usize> {
        self.upsert_attendance_impl(submission).await
    }

    async fn list_attendance_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<AttendanceWithSubject>> {
        self.list_attendance_for_student_impl(student_id).await
    }

    async fn attendance_summary(&self, student_id: i64) -> Result<AttendanceSummary> {
        self.attendance_summary_impl(student_id).await
    }

    // 成绩模块
    async fn upsert_marks(&self, submission: &MarksSubmission) -> Result<usize> {
        self.upsert_marks_impl(submission).await
    }

    async fn list_marks(
        &self,
        class_id: i64,
        subject_id: i64,
        exam_type: &str,
    ) -> Result<Vec<MarkRecord>> {
        self.list_marks_impl(class_id, subject_id, exam_type).await
    }

    async fn list_marks_for_student(&self, student_id: i64) -> Result<Vec<MarkWithSubject>> {
        self.list_marks_for_student_impl(student_id).await
    }

    // 课程资料模块
    async fn create_lecture(&self, lecture: CreateLecture) -> Result<Lecture> {
        self.create_lecture_impl(lecture).await
    }

    async fn list_lectures_by_teacher(&self, teacher_id: i64) -> Result<Vec<LectureWithNames>> {
        self.list_lectures_by_teacher_impl(teacher_id).await
    }

    async fn list_lectures_by_class(&self, class_id: i64) -> Result<Vec<LectureWithNames>> {
        self.list_lectures_by_class_impl(class_id).await
    }

    async fn count_lectures_by_teacher(&self, teacher_id: i64) -> Result<u64> {
        self.count_lectures_by_teacher_impl(teacher_id).await
    }

    // 申请模块
    async fn create_application(
        &self,
        student_id: i64,
        application: ApplicationForm,
    ) -> Result<Application> {
        self.create_application_impl(student_id, application).await
    }

    async fn list_applications_with_student(&self) -> Result<Vec<ApplicationWithStudent>> {
        self.list_applications_with_student_impl().await
    }

    async fn list_applications_by_student(&self, student_id: i64) -> Result<Vec<Application>> {
        self.list_applications_by_student_impl(student_id).await
    }

    async fn transition_application(
        &self,
        application_id: i64,
        action: ApplicationAction,
    ) -> Result<bool> {
        self.transition_application_impl(application_id, action)
            .await
    }

    async fn count_pending_applications_by_student(&self, student_id: i64) -> Result<u64> {
        self.count_pending_applications_by_student_impl(student_id)
            .await
    }

    // 学费模块
    async fn create_fee(&self, fee: FeeForm) -> Result<Fee> {
        self.create_fee_impl(fee).await
    }

    async fn get_fee_by_id(&self, fee_id: i64) -> Result<Option<Fee>> {
        self.get_fee_by_id_impl(fee_id).await
    }

    async fn get_fee_by_class(&self, class_id: i64) -> Result<Option<Fee>> {
        self.get_fee_by_class_impl(class_id).await
    }

    async fn list_fees_with_class(&self) -> Result<Vec<FeeWithClass>> {
        self.list_fees_with_class_impl().await
    }

    async fn update_fee(&self, fee_id: i64, update: FeeForm) -> Result<Option<Fee>> {
        self.update_fee_impl(fee_id, update).await
    }

    async fn delete_fee(&self, fee_id: i64) -> Result<bool> {
        self.delete_fee_impl(fee_id).await
    }

    // 缴费单模块
    async fn create_voucher(&self, voucher: CreateVoucher) -> Result<Voucher> {
        self.create_voucher_impl(voucher).await
    }

    async fn get_voucher_detail(&self, voucher_id: i64) -> Result<Option<VoucherDetail>> {
        self.get_voucher_detail_impl(voucher_id).await
    }

    // 问答模块
    async fn create_question(&self, student_id: i64, question: AskQuestionForm) -> Result<QaThread> {
        self.create_question_impl(student_id, question).await
    }

    async fn list_questions_for_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherQuestionItem>> {
        self.list_questions_for_teacher_impl(teacher_id).await
    }

    async fn list_questions_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentQuestionItem>> {
        self.list_questions_for_student_impl(student_id).await
    }

    async fn answer_question(&self, teacher_id: i64, qa_id: i64, answer: &str) -> Result<bool> {
        self.answer_question_impl(teacher_id, qa_id, answer).await
    }

    async fn count_unanswered_questions(&self, teacher_id: i64) -> Result<u64> {
        self.count_unanswered_questions_impl(teacher_id).await
    }

    // 统计
    async fn admin_stats(&self) -> Result<AdminStats> {
        self.admin_stats_impl().await
    }
}
