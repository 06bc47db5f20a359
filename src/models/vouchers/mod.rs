pub mod entities;
pub mod requests;
pub mod responses;

#[cfg(test)]
mod tests {
    use super::entities::compute_total;
    use super::requests::GenerateVoucherForm;

    #[test]
    fn test_compute_total() {
        assert_eq!(compute_total(5000.0, 300.0, 200.0, 500.0), 5000.0);
        assert_eq!(compute_total(1200.0, 0.0, 0.0, 0.0), 1200.0);
        assert_eq!(compute_total(100.0, 0.0, 0.0, 150.0), -50.0);
    }

    #[test]
    fn test_form_defaults_missing_extras_to_zero() {
        let form = GenerateVoucherForm {
            student_id: 1,
            roll_number: "1001".into(),
            base_amount: 4000.0,
            transport: None,
            sports: Some(250.0),
            discount: None,
            till_date: Some("2025-04-10".into()),
        };
        let create = form.into_create();
        assert_eq!(create.amount, 4000.0);
        assert_eq!(create.discount, 0.0);
        assert_eq!(create.total_payable, 4250.0);
    }
}
