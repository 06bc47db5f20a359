//! 数据模型定义
//!
//! 每个领域按 `entities`（业务实体）、`requests`（表单输入）、
//! `responses`（视图模型）拆分。

pub mod announcements;
pub mod applications;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod common;
pub mod dashboard;
pub mod fees;
pub mod lectures;
pub mod marks;
pub mod qa;
pub mod students;
pub mod subjects;
pub mod teacher_subjects;
pub mod teachers;
pub mod users;
pub mod vouchers;

pub use common::{ApiResponse, ErrorCode};
