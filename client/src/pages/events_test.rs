use super::*;

#[test]
fn summary_without_query_counts_all_events() {
    assert_eq!(result_summary(0, 0, ""), "No public events yet.");
    assert_eq!(result_summary(1, 1, " "), "1 event");
    assert_eq!(result_summary(4, 4, ""), "4 events");
}

#[test]
fn summary_with_query_counts_matches() {
    assert_eq!(result_summary(0, 4, " rust "), "No events match \"rust\".");
    assert_eq!(result_summary(1, 4, "rust"), "1 event found");
    assert_eq!(result_summary(2, 4, "recife"), "2 events found");
}
