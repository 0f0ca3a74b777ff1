//! Teaches actix-web about twoface errors: a handler that fails turns into a
//! response built from the external half, while the internal half goes to the
//! log and nowhere else.

use crate::twoface::TfError;
use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use serde::Serialize;
use tracing::error;

impl actix_web::ResponseError for TfError {
    fn status_code(&self) -> StatusCode {
        self.external.cause.into()
    }

    fn error_response(&self) -> HttpResponse {
        error!("{}", self.internal);
        let resp = serde_json::to_string(&ErrBody {
            error: self.to_string(),
        })
        .unwrap_or_else(|e| {
            error!("Serde error: {}", e.to_string());
            "{\"error\": \"ServerError: internal server error\"}".to_owned()
        });
        HttpResponse::build(self.external.cause.into())
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .body(resp)
    }
}

#[derive(Serialize)]
struct ErrBody {
    error: String,
}

#[cfg(test)]
mod tests {
    use crate::twoface::externalerror::Cause;
    use crate::twoface::*;
    use actix_web::{http::StatusCode, test, web, App};

    #[actix_rt::test]
    async fn test_external_error_becomes_json_response() {
        // A handler that always fails the way a missing post does.
        async fn missing_post() -> Fallible<web::Json<String>> {
            let file = std::fs::read_to_string("post-that-was-deleted.html");
            file.describe_err(ExternalError {
                cause: Cause::NotFound,
                text: "Post not found",
            })
            .map(web::Json)
        }

        let app = test::init_service(
            App::new().service(web::resource("/").route(web::get().to(missing_post))),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = test::read_body(resp).await;
        assert_eq!(body, "{\"error\":\"NotFound: Post not found\"}");
    }
}
