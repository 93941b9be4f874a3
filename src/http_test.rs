use super::*;

fn build(builder: ::http::request::Builder) -> Request<()> {
    builder.body(()).expect("valid request")
}

mod from_request {
    use super::*;

    #[test]
    fn when_headers_present_should_borrow_values() {
        // Arrange
        let request = build(
            Request::builder()
                .method("POST")
                .uri("/account/delete?confirm=1")
                .header("host", "example.com:8443")
                .header("sec-fetch-site", "cross-site")
                .header("origin", "https://evil.com"),
        );

        // Act
        let context = RequestContext::from_request(&request);

        // Assert
        assert_eq!(context.method, "POST");
        assert_eq!(context.host, Some("example.com"));
        assert_eq!(context.path, "/account/delete");
        assert_eq!(context.sec_fetch_site, Some("cross-site"));
        assert_eq!(context.origin, Some("https://evil.com"));
    }

    #[test]
    fn when_uri_is_absolute_should_prefer_uri_host() {
        // Arrange
        let request = build(
            Request::builder()
                .method("POST")
                .uri("https://api.example.com:8443/submit")
                .header("host", "other.example"),
        );

        // Act
        let context = RequestContext::from_request(&request);

        // Assert
        assert_eq!(context.host, Some("api.example.com"));
        assert_eq!(context.path, "/submit");
    }

    #[test]
    fn when_headers_missing_should_leave_fields_empty() {
        // Arrange
        let request = build(Request::builder().method("PUT").uri("/"));

        // Act
        let context = RequestContext::from_request(&request);

        // Assert
        assert_eq!(context.host, None);
        assert_eq!(context.sec_fetch_site, None);
        assert_eq!(context.origin, None);
    }

    #[test]
    fn when_host_is_ipv6_literal_should_keep_brackets() {
        // Arrange
        let request = build(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("host", "[::1]:3000"),
        );

        // Act
        let context = RequestContext::from_request(&request);

        // Assert
        assert_eq!(context.host, Some("[::1]"));
    }

    #[test]
    fn when_origin_not_ascii_should_become_unmatchable() {
        // Arrange
        let origin = ::http::HeaderValue::from_bytes(b"https://\xffevil.com")
            .expect("opaque header value");
        let request = build(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("host", "example.com")
                .header("origin", origin),
        );

        // Act
        let context = RequestContext::from_request(&request);

        // Assert
        assert_eq!(context.origin, Some(UNREADABLE_ORIGIN));
    }
    #[test]
    fn when_sec_fetch_site_not_ascii_should_stay_cross_origin() {
        // Arrange
        let sec_fetch_site = ::http::HeaderValue::from_bytes(b"cross-site\xff")
            .expect("opaque header value");
        let request = build(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("host", "example.com")
                .header("sec-fetch-site", sec_fetch_site),
        );

        // Act
        let context = RequestContext::from_request(&request);

        // Assert
        assert_eq!(context.sec_fetch_site, Some(UNREADABLE_SEC_FETCH_SITE));
        assert_ne!(context.sec_fetch_site, Some("same-origin"));
        assert_ne!(context.sec_fetch_site, Some("none"));
    }
}

mod from_parts {
    use super::*;

    #[test]
    fn when_split_should_match_request_conversion() {
        // Arrange
        let request = build(
            Request::builder()
                .method("DELETE")
                .uri("/items/7")
                .header("host", "example.com")
                .header("origin", "https://example.com"),
        );
        let (parts, ()) = request.into_parts();

        // Act
        let context = RequestContext::from_parts(&parts);

        // Assert
        assert_eq!(context.method, "DELETE");
        assert_eq!(context.host, Some("example.com"));
        assert_eq!(context.path, "/items/7");
        assert_eq!(context.origin, Some("https://example.com"));
    }
}
