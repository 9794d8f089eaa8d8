use super::*;

#[test]
fn init_point_redirects() {
    assert_eq!(
        checkout_outcome(Ok("https://pay.test/checkout/abc".to_owned())),
        CheckoutOutcome::Redirect("https://pay.test/checkout/abc".to_owned())
    );
}

#[test]
fn missing_init_point_reports_and_stays() {
    assert_eq!(
        checkout_outcome(Err(ApiError::MissingInitPoint)),
        CheckoutOutcome::Report("Invalid payment link.".to_owned())
    );
}

#[test]
fn backend_errors_report_with_message() {
    let outcome = checkout_outcome(Err(ApiError::Validation {
        message: "Event is free".to_owned(),
        fields: std::collections::BTreeMap::new(),
    }));
    assert_eq!(outcome, CheckoutOutcome::Report("Could not start payment. Event is free".to_owned()));
}
