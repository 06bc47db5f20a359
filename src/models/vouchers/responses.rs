use serde::Serialize;

use super::entities::Voucher;
use crate::models::{fees::entities::Fee, students::responses::StudentWithClass};

// 按学号检索学生及其班级学费
#[derive(Debug, Serialize)]
pub struct VoucherSearchView {
    pub student: Option<StudentWithClass>,
    pub fee: Option<Fee>,
}

#[derive(Debug, Serialize)]
pub struct VoucherDetail {
    #[serde(flatten)]
    pub voucher: Voucher,
    pub student_name: Option<String>,
    pub parent_name: Option<String>,
    pub class_name: Option<String>,
}
