//! The blog's whole HTTP surface: the rendered pages, the two submission
//! forms, and the delete links. Handlers map form bodies onto the `datastore`
//! structs and translate store misses into 404s.
use crate::api::{observe, views, State};
use crate::datastore::dates;
use crate::datastore::structs::{NewPost, Post, PostEdit, PostId};
use crate::datastore::PostStore;
use crate::twoface::{Cause, Describe, ExternalError, Fallible, TfError};
use actix_web::{http::header, web, HttpResponse};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use tera::Context;

pub fn configure<DS: PostStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(homepage)))
        .service(
            web::resource("/create")
                .route(web::get().to(create_form))
                .route(web::post().to(create_post::<DS>)),
        )
        .service(web::resource("/all").route(web::get().to(list_posts::<DS>)))
        .service(web::resource("/edit").route(web::get().to(edit_index::<DS>)))
        .service(
            web::resource("/edit/{id}")
                .route(web::get().to(edit_form::<DS>))
                .route(web::post().to(edit_post::<DS>)),
        )
        .service(
            web::resource("/delete/{id}")
                .route(web::get().to(delete_post::<DS>))
                .route(web::delete().to(delete_post::<DS>)),
        );
}

/// The new-post form body. Serde names match the HTML input names.
#[derive(Serialize, Deserialize, Debug)]
pub struct SubmitPostForm {
    #[serde(rename = "blog-name")]
    pub blog_name: Option<String>,
    pub author: Option<String>,
    pub text: Option<String>,
}

/// The edit form body: all four mutable fields, each optional.
#[derive(Serialize, Deserialize, Debug)]
pub struct EditPostForm {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
}

// Render the homepage.
async fn homepage() -> Fallible<HttpResponse> {
    observe("homepage", || async {
        views::render("index.html", &Context::new())
    })
    .await
}

// Render the form for writing a new post.
async fn create_form() -> Fallible<HttpResponse> {
    observe("create_form", || async {
        views::render("create.html", &Context::new())
    })
    .await
}

// Map the submission into a post and append it to the store.
async fn create_post<DS: PostStore>(
    state: web::Data<State<DS>>,
    form: web::Form<SubmitPostForm>,
) -> Fallible<HttpResponse> {
    observe("create_post", || async {
        let form = form.into_inner();
        let new_post = NewPost {
            title: form.blog_name,
            author: form.author,
            content: form.text,
        };
        let id = state.ds.next_id().await?;
        let date = dates::synthetic_date(&mut rand::thread_rng());
        state
            .ds
            .append(Post::from_submission(new_post, id, date))
            .await?;
        Ok(see_all())
    })
    .await
}

// Render every post, oldest first.
async fn list_posts<DS: PostStore>(state: web::Data<State<DS>>) -> Fallible<HttpResponse> {
    observe("list_posts", || async {
        let posts = state.ds.list_posts().await?;
        let mut context = Context::new();
        context.insert("posts", &posts);
        views::render("all.html", &context)
    })
    .await
}

// Render the pick-a-post-to-edit page.
async fn edit_index<DS: PostStore>(state: web::Data<State<DS>>) -> Fallible<HttpResponse> {
    observe("edit_index", || async {
        let posts = state.ds.list_posts().await?;
        let mut context = Context::new();
        context.insert("posts", &posts);
        views::render("edit.html", &context)
    })
    .await
}

// Render the edit form for one post.
async fn edit_form<DS: PostStore>(
    state: web::Data<State<DS>>,
    id: web::Path<String>,
) -> Fallible<HttpResponse> {
    observe("edit_form", || async {
        let found = match parse_id(&id) {
            Some(post_id) => state.ds.find_post(post_id).await?,
            None => None,
        };
        guard!(let Some(post) = found else {
            return Err(post_not_found(&id));
        });
        let mut context = Context::new();
        context.insert("post", &post);
        views::render("edit.html", &context)
    })
    .await
}

// Overwrite the post's fields with whatever the edit form sent.
async fn edit_post<DS: PostStore>(
    state: web::Data<State<DS>>,
    id: web::Path<String>,
    form: web::Form<EditPostForm>,
) -> Fallible<HttpResponse> {
    observe("edit_post", || async {
        let form = form.into_inner();
        let edit = PostEdit {
            title: form.title,
            author: form.author,
            content: form.content,
            date: form.date,
        };
        let updated = match parse_id(&id) {
            Some(post_id) => state.ds.update_post(post_id, edit).await?,
            None => None,
        };
        match updated {
            Some(_) => Ok(see_all()),
            None => Err(post_not_found(&id)),
        }
    })
    .await
}

// Remove the post. Registered for both GET and DELETE, so plain links work as
// well as API calls.
async fn delete_post<DS: PostStore>(
    state: web::Data<State<DS>>,
    id: web::Path<String>,
) -> Fallible<HttpResponse> {
    observe("delete_post", || async {
        let removed = match parse_id(&id) {
            Some(post_id) => state.ds.delete_post(post_id).await?,
            None => None,
        };
        match removed {
            Some(_) => Ok(see_all()),
            None => Err(post_not_found(&id)),
        }
    })
    .await
}

/// Path ids arrive as text. One that doesn't parse as an integer matches no
/// post, so callers treat it exactly like an unknown id.
fn parse_id(raw: &str) -> Option<PostId> {
    raw.parse().ok()
}

/// The 404 every missing-post path produces. The raw id only goes to the log.
fn post_not_found(raw_id: &str) -> TfError {
    anyhow!("no post with id {:?}", raw_id).describe(ExternalError {
        cause: Cause::NotFound,
        text: "Post not found",
    })
}

/// Successful writes bounce the browser back to the listing page.
fn see_all() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/all"))
        .finish()
}
