use serde::Serialize;

use crate::models::{
    announcements::entities::Announcement, attendance::entities::AttendanceSummary,
    students::responses::StudentWithClass, teacher_subjects::responses::AssignmentDetail,
};

// 管理员首页统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub teachers: u64,
    pub students: u64,
    pub classes: u64,
    pub subjects: u64,
    pub announcements: u64,
    pub applications: u64,
    pub pending_applications: u64,
}

#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    pub stats: AdminStats,
    pub announcements: Vec<Announcement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeacherStats {
    pub subjects: u64,
    pub lectures: u64,
    pub unanswered_questions: u64,
}

#[derive(Debug, Serialize)]
pub struct TeacherDashboard {
    pub assignments: Vec<AssignmentDetail>,
    pub announcements: Vec<Announcement>,
    pub stats: TeacherStats,
}

#[derive(Debug, Serialize)]
pub struct StudentDashboard {
    pub announcements: Vec<Announcement>,
    pub student: Option<StudentWithClass>,
    pub attendance: AttendanceSummary,
    pub pending_applications: u64,
}
