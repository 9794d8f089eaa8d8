use super::*;

fn request(body: Body, bearer: Option<&str>) -> ApiRequest {
    ApiRequest {
        method: Method::Post,
        url: "http://api.test/api/events".to_owned(),
        bearer: bearer.map(str::to_owned),
        body,
    }
}

#[test]
fn json_requests_carry_content_type_and_bearer() {
    let headers = request(Body::Json(serde_json::json!({})), Some("t-1")).headers();
    assert!(headers.contains(&("Accept", "application/json".to_owned())));
    assert!(headers.contains(&("Content-Type", "application/json".to_owned())));
    assert!(headers.contains(&("Authorization", "Bearer t-1".to_owned())));
}

#[test]
fn multipart_requests_leave_content_type_to_the_http_stack() {
    let headers = request(Body::Multipart(vec![FormPart::text("title", "x")]), Some("t")).headers();
    assert!(headers.iter().all(|(name, _)| *name != "Content-Type"));
}

#[test]
fn anonymous_requests_have_no_authorization_header() {
    let headers = request(Body::Empty, None).headers();
    assert_eq!(headers, vec![("Accept", "application/json".to_owned())]);
}

#[test]
fn success_range_is_2xx_only() {
    let ok = |status| ApiResponse { status, body: String::new() }.is_success();
    assert!(ok(200));
    assert!(ok(204));
    assert!(!ok(199));
    assert!(!ok(302));
    assert!(!ok(401));
}

#[test]
fn form_part_accessors() {
    let text = FormPart::text("price", "15.00");
    assert_eq!(text.name(), "price");
    assert_eq!(text.text_value(), Some("15.00"));
    let file = FormPart::File {
        name: "image".to_owned(),
        upload: Upload {
            file_name: "a.png".to_owned(),
            content_type: "image/png".to_owned(),
            bytes: vec![1, 2],
        },
    };
    assert_eq!(file.name(), "image");
    assert_eq!(file.text_value(), None);
}
