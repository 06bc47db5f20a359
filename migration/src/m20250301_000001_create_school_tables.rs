use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 自增主键列
fn id_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_column(Users::Id))
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(id_column(Classes::Id))
                    .col(
                        ColumnDef::new(Classes::ClassName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(id_column(Subjects::Id))
                    .col(ColumnDef::new(Subjects::SubjectName).string().not_null())
                    .col(ColumnDef::new(Subjects::ClassId).big_integer().null())
                    .to_owned(),
            )
            .await?;

        // 学生档案表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(id_column(Students::Id))
                    .col(ColumnDef::new(Students::UserId).big_integer().null())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Dob).string().null())
                    .col(ColumnDef::new(Students::Gender).string().null())
                    .col(ColumnDef::new(Students::Address).string().null())
                    .col(ColumnDef::new(Students::ParentName).string().null())
                    .col(ColumnDef::new(Students::ParentCnic).string().null())
                    .col(ColumnDef::new(Students::Phone).string().null())
                    .col(
                        ColumnDef::new(Students::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::ClassId).big_integer().null())
                    .col(
                        ColumnDef::new(Students::RollNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 教师档案表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(id_column(Teachers::Id))
                    .col(ColumnDef::new(Teachers::UserId).big_integer().null())
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .col(ColumnDef::new(Teachers::Dob).string().null())
                    .col(
                        ColumnDef::new(Teachers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::Gender).string().null())
                    .col(ColumnDef::new(Teachers::Phone).string().null())
                    .col(ColumnDef::new(Teachers::Address).string().null())
                    .col(ColumnDef::new(Teachers::Cnic).string().null())
                    .to_owned(),
            )
            .await?;

        // 教师授课分配表
        manager
            .create_table(
                Table::create()
                    .table(TeacherSubjects::Table)
                    .if_not_exists()
                    .col(id_column(TeacherSubjects::Id))
                    .col(
                        ColumnDef::new(TeacherSubjects::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherSubjects::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherSubjects::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 公告表
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(id_column(Announcements::Id))
                    .col(ColumnDef::new(Announcements::Title).string().not_null())
                    .col(ColumnDef::new(Announcements::Details).text().null())
                    .col(ColumnDef::new(Announcements::StartDate).string().null())
                    .col(ColumnDef::new(Announcements::EndDate).string().null())
                    .col(
                        ColumnDef::new(Announcements::AssignedTo)
                            .string()
                            .not_null()
                            .default("all"),
                    )
                    .col(ColumnDef::new(Announcements::CreatedBy).big_integer().null())
                    .col(
                        ColumnDef::new(Announcements::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 考勤表
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(id_column(Attendance::Id))
                    .col(ColumnDef::new(Attendance::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Attendance::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Attendance::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Attendance::Date).string().not_null())
                    .col(ColumnDef::new(Attendance::Status).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 成绩表
        manager
            .create_table(
                Table::create()
                    .table(Marks::Table)
                    .if_not_exists()
                    .col(id_column(Marks::Id))
                    .col(ColumnDef::new(Marks::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Marks::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Marks::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Marks::MarksObtained).integer().not_null())
                    .col(ColumnDef::new(Marks::TotalMarks).integer().not_null())
                    .col(ColumnDef::new(Marks::ExamType).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 课程资料表
        manager
            .create_table(
                Table::create()
                    .table(Lectures::Table)
                    .if_not_exists()
                    .col(id_column(Lectures::Id))
                    .col(ColumnDef::new(Lectures::Title).string().not_null())
                    .col(ColumnDef::new(Lectures::Description).text().null())
                    .col(ColumnDef::new(Lectures::FileName).string().null())
                    .col(ColumnDef::new(Lectures::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Lectures::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Lectures::TeacherId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Lectures::Kind)
                            .string()
                            .not_null()
                            .default("lecture"),
                    )
                    .col(ColumnDef::new(Lectures::DueDate).string().null())
                    .col(ColumnDef::new(Lectures::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 学生申请表
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(id_column(Applications::Id))
                    .col(
                        ColumnDef::new(Applications::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Applications::Subject).string().not_null())
                    .col(ColumnDef::new(Applications::Details).text().null())
                    .col(
                        ColumnDef::new(Applications::SendTo)
                            .string()
                            .not_null()
                            .default("Admin"),
                    )
                    .col(
                        ColumnDef::new(Applications::Status)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(Applications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 学费标准表（每个班级一条）
        manager
            .create_table(
                Table::create()
                    .table(Fees::Table)
                    .if_not_exists()
                    .col(id_column(Fees::Id))
                    .col(
                        ColumnDef::new(Fees::ClassId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Fees::Amount).double().not_null())
                    .col(
                        ColumnDef::new(Fees::Transport)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Fees::Sports).double().not_null().default(0.0))
                    .to_owned(),
            )
            .await?;

        // 缴费单表
        manager
            .create_table(
                Table::create()
                    .table(Vouchers::Table)
                    .if_not_exists()
                    .col(id_column(Vouchers::Id))
                    .col(ColumnDef::new(Vouchers::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Vouchers::RollNumber).string().not_null())
                    .col(ColumnDef::new(Vouchers::Amount).double().not_null())
                    .col(
                        ColumnDef::new(Vouchers::Discount)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Vouchers::TotalPayable).double().not_null())
                    .col(ColumnDef::new(Vouchers::TillDate).string().null())
                    .col(
                        ColumnDef::new(Vouchers::GeneratedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 问答表
        manager
            .create_table(
                Table::create()
                    .table(Qa::Table)
                    .if_not_exists()
                    .col(id_column(Qa::Id))
                    .col(ColumnDef::new(Qa::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Qa::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Qa::SubjectId).big_integer().null())
                    .col(ColumnDef::new(Qa::Question).text().not_null())
                    .col(ColumnDef::new(Qa::Answer).text().null())
                    .col(ColumnDef::new(Qa::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 自然键唯一索引：重复提交只会更新，不会产生重复记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_attendance_student_subject_date")
                    .table(Attendance::Table)
                    .col(Attendance::StudentId)
                    .col(Attendance::SubjectId)
                    .col(Attendance::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_marks_student_subject_exam")
                    .table(Marks::Table)
                    .col(Marks::StudentId)
                    .col(Marks::SubjectId)
                    .col(Marks::ExamType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 查询索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_class_id")
                    .table(Students::Table)
                    .col(Students::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subjects_class_id")
                    .table(Subjects::Table)
                    .col(Subjects::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teacher_subjects_teacher_id")
                    .table(TeacherSubjects::Table)
                    .col(TeacherSubjects::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lectures_class_id")
                    .table(Lectures::Table)
                    .col(Lectures::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_applications_student_id")
                    .table(Applications::Table)
                    .col(Applications::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_qa_teacher_id")
                    .table(Qa::Table)
                    .col(Qa::TeacherId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Qa::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vouchers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lectures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Marks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    ClassName,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    SubjectName,
    ClassId,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    UserId,
    Name,
    Dob,
    Gender,
    Address,
    ParentName,
    ParentCnic,
    Phone,
    Email,
    ClassId,
    RollNumber,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    UserId,
    Name,
    Dob,
    Email,
    Gender,
    Phone,
    Address,
    Cnic,
}

#[derive(DeriveIden)]
enum TeacherSubjects {
    #[sea_orm(iden = "teacher_subjects")]
    Table,
    Id,
    TeacherId,
    SubjectId,
    ClassId,
}

#[derive(DeriveIden)]
enum Announcements {
    #[sea_orm(iden = "announcements")]
    Table,
    Id,
    Title,
    Details,
    StartDate,
    EndDate,
    AssignedTo,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Attendance {
    #[sea_orm(iden = "attendance")]
    Table,
    Id,
    StudentId,
    SubjectId,
    ClassId,
    Date,
    Status,
}

#[derive(DeriveIden)]
enum Marks {
    #[sea_orm(iden = "marks")]
    Table,
    Id,
    StudentId,
    SubjectId,
    ClassId,
    MarksObtained,
    TotalMarks,
    ExamType,
}

#[derive(DeriveIden)]
enum Lectures {
    #[sea_orm(iden = "lectures")]
    Table,
    Id,
    Title,
    Description,
    FileName,
    SubjectId,
    ClassId,
    TeacherId,
    Kind,
    DueDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Applications {
    #[sea_orm(iden = "applications")]
    Table,
    Id,
    StudentId,
    Subject,
    Details,
    SendTo,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Fees {
    #[sea_orm(iden = "fees")]
    Table,
    Id,
    ClassId,
    Amount,
    Transport,
    Sports,
}

#[derive(DeriveIden)]
enum Vouchers {
    #[sea_orm(iden = "vouchers")]
    Table,
    Id,
    StudentId,
    RollNumber,
    Amount,
    Discount,
    TotalPayable,
    TillDate,
    GeneratedAt,
}

#[derive(DeriveIden)]
enum Qa {
    #[sea_orm(iden = "qa")]
    Table,
    Id,
    StudentId,
    TeacherId,
    SubjectId,
    Question,
    Answer,
    CreatedAt,
}
