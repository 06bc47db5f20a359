use serde::Serialize;

use super::entities::Fee;
use crate::models::classes::entities::Class;

#[derive(Debug, Clone, Serialize)]
pub struct FeeWithClass {
    #[serde(flatten)]
    pub fee: Fee,
    pub class_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeesView {
    pub fees: Vec<FeeWithClass>,
    pub classes: Vec<Class>,
}

#[derive(Debug, Serialize)]
pub struct FeeEditView {
    pub fee: Fee,
    pub classes: Vec<Class>,
}
