// SPDX-License-Identifier: MIT
// web/routes/tasks.rs — The four task endpoints.
//
// Failure mapping, per kind:
//   validation   → flash message + redirect to `/`, nothing stored
//   not-found    → 404 page, request ends there
//   store error  → flash message + redirect to `/`, state unchanged

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::tasks::{validate_description, TaskStoreError};
use crate::web::flash::{self, Flash};
use crate::web::pages;
use crate::AppContext;

/// GET `/` — render the full task list plus any pending flash messages.
pub async fn index(State(ctx): State<Arc<AppContext>>, headers: HeaderMap) -> Response {
    let flashes = flash::from_headers(&headers, ctx.config.secret_key.as_bytes());
    let tasks = match ctx.tasks.list_tasks().await {
        Ok(tasks) => tasks,
        Err(e) => {
            error!(err = %e, "listing tasks failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::server_error()),
            )
                .into_response();
        }
    };
    let mut response = Html(pages::index(&tasks, &flashes)).into_response();
    if !flashes.is_empty() {
        // One-shot: the messages were rendered, drop the cookie.
        response.headers_mut().insert(
            header::SET_COOKIE,
            HeaderValue::from_static(flash::CLEAR_COOKIE),
        );
    }
    response
}

#[derive(Deserialize)]
pub struct CreateTaskForm {
    #[serde(default)]
    pub description: String,
}

/// POST `/` — validate the submitted description, insert, redirect to `/`.
///
/// The redirect-after-post means a page refresh never resubmits the form.
/// Rejections and storage failures redirect too, carrying the reason as a
/// flash message.
pub async fn create(
    State(ctx): State<Arc<AppContext>>,
    Form(form): Form<CreateTaskForm>,
) -> Response {
    if let Err(reason) = validate_description(&form.description) {
        debug!(%reason, "rejected task submission");
        return redirect_with_flash(&ctx, Flash::error(reason.to_string()));
    }
    match ctx.tasks.insert_task(&form.description).await {
        Ok(task) => {
            debug!(task_id = task.id, "task created");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            error!(err = %e, "task insert failed");
            redirect_with_flash(
                &ctx,
                Flash::error("The task could not be saved. Nothing was added."),
            )
        }
    }
}

/// GET `/complete/{id}` — flip the completed flag; 404 when the id is unknown.
pub async fn toggle(State(ctx): State<Arc<AppContext>>, Path(id): Path<i64>) -> Response {
    match ctx.tasks.toggle_completed(id).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(TaskStoreError::NotFound { .. }) => not_found(),
        Err(e) => {
            error!(task_id = id, err = %e, "task toggle failed");
            redirect_with_flash(&ctx, Flash::error("The task could not be updated."))
        }
    }
}

/// GET `/delete/{id}` — remove the task permanently; 404 when the id is unknown.
pub async fn delete(State(ctx): State<Arc<AppContext>>, Path(id): Path<i64>) -> Response {
    match ctx.tasks.delete_task(id).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(TaskStoreError::NotFound { .. }) => not_found(),
        Err(e) => {
            error!(task_id = id, err = %e, "task delete failed");
            redirect_with_flash(&ctx, Flash::error("The task could not be deleted."))
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(pages::not_found())).into_response()
}

/// Redirect to the list view with `message` queued for the next render.
/// If the cookie cannot be built the redirect still happens, minus the message.
fn redirect_with_flash(ctx: &AppContext, message: Flash) -> Response {
    let mut response = Redirect::to("/").into_response();
    let cookie = flash::set_cookie(&[message], ctx.config.secret_key.as_bytes())
        .and_then(|c| HeaderValue::from_str(&c).map_err(Into::into));
    match cookie {
        Ok(value) => {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
        Err(e) => warn!(err = %e, "failed to seal flash cookie — message dropped"),
    }
    response
}
