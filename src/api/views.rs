//! Server-rendered HTML. All four page templates are baked into the binary
//! and compiled into one shared Tera instance on first use.

use crate::twoface::{Cause, DescribeErr, ExternalError, Fallible};
use actix_web::HttpResponse;
use tera::{Context, Tera};

lazy_static! {
    static ref TEMPLATES: Tera = {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("index.html", include_str!("../../templates/index.html")),
            ("create.html", include_str!("../../templates/create.html")),
            ("all.html", include_str!("../../templates/all.html")),
            ("edit.html", include_str!("../../templates/edit.html")),
        ])
        .expect("couldn't compile page templates");
        tera
    };
}

/// Render the named template into an HTML response.
pub fn render(name: &str, context: &Context) -> Fallible<HttpResponse> {
    let html = TEMPLATES.render(name, context).describe_err(ExternalError {
        cause: Cause::ServerError,
        text: "Couldn't render the page",
    })?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
