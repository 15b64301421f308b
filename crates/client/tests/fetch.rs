//! Runs the blocking client against a wiremock server.
//!
//! The mock server lives on its own thread, so requests are made from the plain test thread and
//! the runtime is only used to set up mocks.
use canvas_client::{Assignment, Client, ClientOptions, Course, Error, Quiz, Token};
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn client(server: &MockServer, follow_pages: bool) -> Client {
    Client::new(
        &format!("{}/api/v1", server.uri()),
        &Token::from("tok".to_string()),
        ClientOptions {
            per_page: 1,
            follow_pages,
            ..Default::default()
        },
    )
    .unwrap()
}

/// Page 1 links to page 2. Only matches authenticated requests with our page size.
fn mount_two_pages(rt: &Runtime, server: &MockServer, route: &str, page2: ResponseTemplate) {
    let next = format!(
        r#"<{}{}?page=2&per_page=1>; rel="next""#,
        server.uri(),
        route
    );

    rt.block_on(async {
        Mock::given(method("GET"))
            .and(path(route))
            .and(query_param("page", "2"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(page2)
            .with_priority(1)
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path(route))
            .and(query_param("per_page", "1"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("link", next.as_str())
                    .set_body_json(json!([{"id": 1, "name": "a", "title": "a"}])),
            )
            .mount(server)
            .await;
    });
}

#[test]
fn test_follows_next_links() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    mount_two_pages(
        &rt,
        &server,
        "/api/v1/courses",
        ResponseTemplate::new(200).set_body_json(json!([{"id": 2, "name": "b"}])),
    );

    let courses = client(&server, true).courses().unwrap();

    assert_eq!(
        courses,
        vec![
            Course {
                id: 1,
                name: Some("a".to_string())
            },
            Course {
                id: 2,
                name: Some("b".to_string())
            },
        ]
    );
}

#[test]
fn test_single_page_stops_after_first() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    mount_two_pages(
        &rt,
        &server,
        "/api/v1/courses",
        ResponseTemplate::new(200).set_body_json(json!([{"id": 2, "name": "b"}])),
    );

    let courses = client(&server, false).courses().unwrap();

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, 1);
}

#[test]
fn test_failed_later_page_keeps_earlier_items() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    mount_two_pages(
        &rt,
        &server,
        "/api/v1/courses/5/quizzes",
        ResponseTemplate::new(500),
    );

    let quizzes = client(&server, true)
        .course_resources::<Quiz>(5)
        .unwrap()
        .unwrap();

    assert_eq!(quizzes.len(), 1);
    assert_eq!(quizzes[0].title.as_deref(), Some("a"));
}

#[test]
fn test_missing_resource_is_none() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/5/assignments"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server),
    );

    let assignments = client(&server, true)
        .course_resources::<Assignment>(5)
        .unwrap();

    assert!(assignments.is_none());
}

#[test]
fn test_forbidden_resource_is_none() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/5/quizzes"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server),
    );

    assert!(client(&server, true)
        .course_resources::<Quiz>(5)
        .unwrap()
        .is_none());
}

#[test]
fn test_course_list_failure_is_error() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/v1/courses"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server),
    );

    match client(&server, true).courses() {
        Err(Error::BadStatus { status, url }) => {
            assert_eq!(status.as_u16(), 401);
            assert!(url.ends_with("/api/v1/courses?per_page=1"));
        }
        other => panic!("expected BadStatus, got {:?}", other),
    }
}

#[test]
fn test_malformed_body_is_error() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/5/assignments"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server),
    );

    assert!(client(&server, true)
        .course_resources::<Assignment>(5)
        .is_err());
}
