//! Authentication gate behavior over the HTTP surface.
//!
//! Exercises the JWT middleware and the `UserId` extractor against stub
//! handlers, without a database: every unauthenticated path must be denied
//! with 401 before any handler logic runs, and public reads must stay open.

use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse};
use blog_service::middleware::{JwtAuthMiddleware, UserId};

async fn public_handler() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn write_handler(_user: UserId) -> HttpResponse {
    HttpResponse::Created().finish()
}

fn app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .service(
            web::scope("/api/v1/follow")
                .wrap(JwtAuthMiddleware)
                .route("", web::get().to(public_handler)),
        )
        .service(
            web::resource("/api/v1/posts")
                .route(web::get().to(public_handler))
                .route(web::post().to(write_handler)),
        )
}

#[actix_web::test]
async fn follow_reads_require_authentication() {
    let app = test::init_service(app()).await;

    let req = test::TestRequest::get().uri("/api/v1/follow").to_request();
    let err = test::try_call_service(&app, req)
        .await
        .expect_err("request without credentials must be rejected");

    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn follow_scope_rejects_non_bearer_scheme() {
    let app = test::init_service(app()).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/follow")
        .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
        .to_request();
    let err = test::try_call_service(&app, req)
        .await
        .expect_err("non-bearer credentials must be rejected");

    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn follow_scope_rejects_garbage_token() {
    let app = test::init_service(app()).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/follow")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let err = test::try_call_service(&app, req)
        .await
        .expect_err("unverifiable token must be rejected");

    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn writes_require_authentication() {
    let app = test::init_service(app()).await;

    // A failing extractor surfaces as an error response, not a service-level
    // `Err` like the middleware paths above.
    let req = test::TestRequest::post().uri("/api/v1/posts").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn reads_stay_open_to_anonymous_callers() {
    let app = test::init_service(app()).await;

    let req = test::TestRequest::get().uri("/api/v1/posts").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
