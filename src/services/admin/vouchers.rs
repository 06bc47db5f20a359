use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AdminService;
use crate::models::{
    ApiResponse,
    vouchers::{
        requests::{GenerateVoucherForm, VoucherSearchQuery},
        responses::VoucherSearchView,
    },
};
use crate::services::internal_error;
use crate::utils::{render_view, see_other};

/// 按学号检索学生及其班级学费
pub async fn search_voucher(
    service: &AdminService,
    request: &HttpRequest,
    query: VoucherSearchQuery,
) -> ActixResult<HttpResponse> {
    let Some(roll_number) = query.roll_number else {
        let empty = VoucherSearchView {
            student: None,
            fee: None,
        };
        return Ok(render_view(request, Some(empty)));
    };

    let storage = service.get_storage(request);

    let student = match storage.get_student_by_roll_number(roll_number.trim()).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            let empty = VoucherSearchView {
                student: None,
                fee: None,
            };
            return Ok(HttpResponse::Ok().json(ApiResponse::view(Some(empty), "Student not found.")));
        }
        Err(e) => return Ok(internal_error("Failed to search student", e)),
    };

    let fee = match student.student.class_id {
        Some(class_id) => match storage.get_fee_by_class(class_id).await {
            Ok(fee) => fee,
            Err(e) => return Ok(internal_error("Failed to get class fee", e)),
        },
        None => None,
    };

    Ok(render_view(
        request,
        Some(VoucherSearchView {
            student: Some(student),
            fee,
        }),
    ))
}

/// 生成缴费单后跳转到详情页
pub async fn generate_voucher(
    service: &AdminService,
    request: &HttpRequest,
    form: GenerateVoucherForm,
) -> ActixResult<HttpResponse> {
    let create = form.into_create();

    match service.get_storage(request).create_voucher(create).await {
        Ok(voucher) => {
            info!(
                "Voucher {} generated for {} (total {})",
                voucher.id, voucher.roll_number, voucher.total_payable
            );
            Ok(see_other(&format!("/admin/voucher/view/{}", voucher.id)))
        }
        Err(e) => Ok(internal_error("Voucher generation failed", e)),
    }
}

pub async fn view_voucher(
    service: &AdminService,
    request: &HttpRequest,
    voucher_id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).get_voucher_detail(voucher_id).await {
        Ok(detail) => Ok(render_view(request, detail)),
        Err(e) => Ok(internal_error("Failed to get voucher", e)),
    }
}
