use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const PRESENT: &'static str = "Present";
    pub const ABSENT: &'static str = "Absent";
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "{}", Self::PRESENT),
            AttendanceStatus::Absent => write!(f, "{}", Self::ABSENT),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AttendanceStatus::PRESENT => Ok(AttendanceStatus::Present),
            AttendanceStatus::ABSENT => Ok(AttendanceStatus::Absent),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

// 考勤记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub class_id: i64,
    pub date: String,
    pub status: AttendanceStatus,
}

/// 出勤统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub present: u64,
    pub total: u64,
    pub percentage: u64,
}

impl AttendanceSummary {
    /// 百分比取整（四舍六入五成双），无记录时为 0
    pub fn from_counts(present: u64, total: u64) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            (present as f64 / total as f64 * 100.0).round_ties_even() as u64
        };
        Self {
            present,
            total,
            percentage,
        }
    }
}
