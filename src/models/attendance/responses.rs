use serde::Serialize;

use super::entities::{AttendanceRecord, AttendanceSummary};
use crate::models::{students::entities::Student, teacher_subjects::responses::AssignmentDetail};

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceSelection {
    pub class_id: i64,
    pub subject_id: i64,
}

// 教师考勤页面
#[derive(Debug, Serialize)]
pub struct TeacherAttendanceView {
    pub assignments: Vec<AssignmentDetail>,
    pub selected: Option<AttendanceSelection>,
    pub students: Vec<Student>,
    pub today: String,
}

// 学生考勤记录（附带科目名称）
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceWithSubject {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    pub subject_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StudentAttendanceView {
    pub records: Vec<AttendanceWithSubject>,
    pub summary: AttendanceSummary,
}
