//! The `public/` directory, embedded at compile time. Pages link to these
//! files (stylesheets, for now) by absolute path.

use actix_web::{http::header, HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};

static PUBLIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/public");

/// Serve one file from `public/`. Registered as the app's default service, so
/// every request no route claimed lands here; paths outside the directory 404.
pub async fn serve(request: HttpRequest) -> HttpResponse {
    let path = request.path().trim_start_matches('/');
    match PUBLIC_DIR.get_file(path) {
        Some(file) => HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, content_type(path)))
            .body(file.contents()),
        None => HttpResponse::NotFound().body("Not found"),
    }
}

/// Content type from the file extension. Covers what `public/` ships plus the
/// usual suspects people drop in later.
fn content_type(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("css") => "text/css; charset=utf-8",
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
