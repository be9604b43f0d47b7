//! Every adapter serves the full fixture with the same semantics.

use axum::http::header::ALLOW;
use axum::http::{Method, StatusCode};
use mux_bench::fixture::{Fixture, RouteRequest, DEFAULT_NAMESPACES};
use mux_bench::harness::{Harness, ResponseCheck};

mod common;

#[test]
fn test_simple_answers_hello() {
    let request = RouteRequest::new(Method::GET, "/action").unwrap();
    for router in common::all_routers() {
        let mut dispatcher = router.simple().unwrap();
        let recorder = common::serve(dispatcher.as_mut(), &request);
        assert_eq!(recorder.status(), StatusCode::OK, "{}", router.name());
        assert_eq!(recorder.body(), b"hello", "{}", router.name());
    }
}

#[test]
fn test_every_fixture_request_answers_hello() {
    for n in [1, 5, 20] {
        let fixture = Fixture::generate(&DEFAULT_NAMESPACES, n).unwrap();
        for router in common::all_routers() {
            let mut dispatcher = router.build(fixture.namespaces(), fixture.resources()).unwrap();
            for request in fixture.requests() {
                let recorder = common::serve(dispatcher.as_mut(), request);
                assert_eq!(
                    recorder.status(),
                    StatusCode::OK,
                    "{} {} {}",
                    router.name(),
                    request.method(),
                    request.path()
                );
                assert_eq!(recorder.body(), b"hello");
            }
        }
    }
}

#[test]
fn test_checked_harness_wraps_for_every_router() {
    let fixture = Fixture::generate(&DEFAULT_NAMESPACES, 1).unwrap();
    for router in common::all_routers() {
        let mut dispatcher = router.build(fixture.namespaces(), fixture.resources()).unwrap();
        let report = Harness::new(dispatcher.as_mut(), fixture.requests(), ResponseCheck::hello())
            .run(17)
            .unwrap();
        assert_eq!(report.iterations, 17, "{}", router.name());
    }
}

#[test]
fn test_unknown_path_is_404() {
    let fixture = Fixture::generate(&DEFAULT_NAMESPACES, 1).unwrap();
    let request = RouteRequest::new(Method::GET, "/admin/unknown/3937/extra").unwrap();
    for router in common::all_routers() {
        let mut dispatcher = router.build(fixture.namespaces(), fixture.resources()).unwrap();
        let recorder = common::serve(dispatcher.as_mut(), &request);
        assert_eq!(recorder.status(), StatusCode::NOT_FOUND, "{}", router.name());
    }
}

#[test]
fn test_wrong_method_is_405() {
    let fixture = Fixture::generate(&DEFAULT_NAMESPACES, 1).unwrap();
    let collection = fixture.requests()[0].path().to_string();
    let request = RouteRequest::new(Method::DELETE, &collection).unwrap();
    for router in common::all_routers() {
        let mut dispatcher = router.build(fixture.namespaces(), fixture.resources()).unwrap();
        let recorder = common::serve(dispatcher.as_mut(), &request);
        assert_eq!(recorder.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", router.name());
    }
}

#[test]
fn test_trailing_slash_is_404() {
    let fixture = Fixture::generate(&DEFAULT_NAMESPACES, 1).unwrap();
    let collection = format!("{}/", fixture.requests()[0].path());
    let request = RouteRequest::new(Method::GET, &collection).unwrap();
    for router in common::all_routers() {
        let mut dispatcher = router.build(fixture.namespaces(), fixture.resources()).unwrap();
        let recorder = common::serve(dispatcher.as_mut(), &request);
        assert_eq!(recorder.status(), StatusCode::NOT_FOUND, "{}", router.name());
    }
}

#[test]
fn test_head_answers_like_get_without_body() {
    let fixture = Fixture::generate(&DEFAULT_NAMESPACES, 1).unwrap();
    for path in [fixture.requests()[0].path(), fixture.requests()[2].path()] {
        let request = RouteRequest::new(Method::HEAD, path).unwrap();
        for router in common::all_routers() {
            let mut dispatcher = router.build(fixture.namespaces(), fixture.resources()).unwrap();
            let recorder = common::serve(dispatcher.as_mut(), &request);
            assert_eq!(recorder.status(), StatusCode::OK, "{} {}", router.name(), path);
            assert!(recorder.body().is_empty(), "{} {}", router.name(), path);
        }
    }
}

#[test]
fn test_allow_header_agrees() {
    let fixture = Fixture::generate(&DEFAULT_NAMESPACES, 1).unwrap();
    let cases = [
        (Method::DELETE, fixture.requests()[0].path(), "GET,HEAD,POST"),
        (Method::POST, fixture.requests()[2].path(), "GET,HEAD,PUT,DELETE"),
    ];
    for (method, path, allow) in cases {
        let request = RouteRequest::new(method, path).unwrap();
        for router in common::all_routers() {
            let mut dispatcher = router.build(fixture.namespaces(), fixture.resources()).unwrap();
            let recorder = common::serve(dispatcher.as_mut(), &request);
            assert_eq!(recorder.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", router.name());
            assert_eq!(recorder.headers()[ALLOW], allow, "{}", router.name());
        }
    }
}

#[test]
fn test_empty_resource_set_builds() {
    let fixture = Fixture::generate(&DEFAULT_NAMESPACES, 0).unwrap();
    for router in common::all_routers() {
        let mut dispatcher = router.build(fixture.namespaces(), fixture.resources()).unwrap();
        let report = Harness::new(dispatcher.as_mut(), fixture.requests(), ResponseCheck::hello())
            .run(10)
            .unwrap();
        assert_eq!(report.iterations, 0);
    }
}
