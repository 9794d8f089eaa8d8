use super::*;

#[test]
fn resolve_api_url_prefers_configured_value() {
    assert_eq!(resolve_api_url(Some("https://api.devevents.test")), "https://api.devevents.test");
}

#[test]
fn resolve_api_url_falls_back_when_unset_or_blank() {
    assert_eq!(resolve_api_url(None), DEFAULT_API_URL);
    assert_eq!(resolve_api_url(Some("  ")), DEFAULT_API_URL);
}
