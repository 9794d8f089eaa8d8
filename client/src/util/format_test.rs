use super::*;

#[test]
fn format_date_reorders_iso_dates() {
    assert_eq!(format_date("2025-03-01"), "01/03/2025");
    assert_eq!(format_date("2025-03-01T19:00:00.000000Z"), "01/03/2025");
    assert_eq!(format_date("2025-03-01 19:00:00"), "01/03/2025");
}

#[test]
fn format_date_passes_through_unparseable_values() {
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("next friday"), "next friday");
    assert_eq!(format_date("2025-3-1"), "2025-3-1");
}

#[test]
fn format_price_labels_free_events() {
    assert_eq!(format_price(0.0), "Free");
    assert_eq!(format_price(15.0), "R$ 15.00");
    assert_eq!(format_price(9.5), "R$ 9.50");
}

#[test]
fn member_since_requires_timestamp() {
    assert_eq!(member_since(None), None);
    assert_eq!(member_since(Some(" ")), None);
    assert_eq!(
        member_since(Some("2024-11-20T10:00:00Z")).as_deref(),
        Some("Member since 20/11/2024")
    );
}
