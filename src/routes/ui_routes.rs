//! HTML screens
//!
//! Every table gets a view page and add, delete and search forms. Errors are
//! shown as a notice above the form, with the status code the JSON API would
//! use for the same failure.

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, Response},
    routing::get,
    Form, Router,
};

use crate::controllers::{added_message, not_found_message};
use crate::models::{Driver, Entity, MaintenanceTask, Trip, Vehicle};
use crate::state::AppState;
use crate::ui::forms::render_form;
use crate::ui::table::render_rows;
use crate::ui::{page, respond, FormField, Notice, Operation, Screens};
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_ui_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .merge(entity_screens::<Vehicle>())
        .merge(entity_screens::<Driver>())
        .merge(entity_screens::<MaintenanceTask>())
        .merge(entity_screens::<Trip>())
}

fn entity_screens<E: Screens>() -> Router<AppState> {
    let table = <E as Entity>::TABLE;

    Router::new()
        .route(&Operation::View.path(table), get(view_rows::<E>))
        .route(
            &Operation::Add.path(table),
            get(add_form::<E>).post(add_row::<E>),
        )
        .route(
            &Operation::Delete.path(table),
            get(delete_form::<E>).post(delete_rows::<E>),
        )
        .route(
            &Operation::Search.path(table),
            get(search_form::<E>).post(search_rows::<E>),
        )
}

async fn home() -> Html<String> {
    Html(page(
        "Home",
        None,
        None,
        "<p>Pick a table and an operation from the menu.</p>",
    ))
}

fn fields<E: Screens>(operation: Operation) -> &'static [FormField] {
    match operation {
        Operation::Add => E::ADD_FIELDS,
        Operation::Delete => E::DELETE_FIELDS,
        Operation::Search => E::SEARCH_FIELDS,
        Operation::View => &[],
    }
}

/// Page for one screen: its form, an optional notice and optional results
fn render_screen<E: Screens>(
    operation: Operation,
    status: StatusCode,
    notice: Option<Notice>,
    results: &str,
) -> Response {
    let table = <E as Entity>::TABLE;
    let heading = format!("{} {}", operation.verb(), table.label());

    let mut content = String::new();
    if operation != Operation::View {
        content.push_str(&render_form(
            &operation.path(table),
            fields::<E>(operation),
            &heading,
        ));
    }
    content.push_str(results);

    respond(
        status,
        page(&heading, Some((operation, table)), notice.as_ref(), &content),
    )
}

fn failure<E: Screens>(operation: Operation, err: AppError) -> Response {
    err.log();
    render_screen::<E>(
        operation,
        err.status_code(),
        Some(Notice::Error(err.user_message())),
        "",
    )
}

fn rejected<E: Screens>(operation: Operation, rejection: FormRejection) -> Response {
    failure::<E>(operation, bad_request_error(&rejection.body_text()))
}

async fn add_form<E: Screens>() -> Response {
    render_screen::<E>(Operation::Add, StatusCode::OK, None, "")
}

async fn delete_form<E: Screens>() -> Response {
    render_screen::<E>(Operation::Delete, StatusCode::OK, None, "")
}

async fn search_form<E: Screens>() -> Response {
    render_screen::<E>(Operation::Search, StatusCode::OK, None, "")
}

async fn view_rows<E: Screens>(State(state): State<AppState>) -> Response {
    match state.controller().list::<E>().await {
        Ok(rows) if rows.is_empty() => render_screen::<E>(
            Operation::View,
            StatusCode::OK,
            None,
            &format!("<p>No {} rows yet.</p>", <E as Entity>::TABLE.label()),
        ),
        Ok(rows) => render_screen::<E>(Operation::View, StatusCode::OK, None, &render_rows(&rows)),
        Err(err) => failure::<E>(Operation::View, err),
    }
}

async fn add_row<E: Screens>(
    State(state): State<AppState>,
    form: Result<Form<E::Add>, FormRejection>,
) -> Response {
    let Form(request) = match form {
        Ok(form) => form,
        Err(rejection) => return rejected::<E>(Operation::Add, rejection),
    };

    match state.controller().add(request).await {
        Ok(_) => {
            let message = added_message(<E as Entity>::TABLE);
            render_screen::<E>(Operation::Add, StatusCode::OK, Some(Notice::Success(message)), "")
        }
        Err(err) => failure::<E>(Operation::Add, err),
    }
}

async fn delete_rows<E: Screens>(
    State(state): State<AppState>,
    form: Result<Form<E::Delete>, FormRejection>,
) -> Response {
    let Form(request) = match form {
        Ok(form) => form,
        Err(rejection) => return rejected::<E>(Operation::Delete, rejection),
    };

    match state.controller().delete(&request).await {
        Ok(outcome) => {
            let notice = if outcome.deleted == 0 {
                Notice::Warning(outcome.message())
            } else {
                Notice::Success(outcome.message())
            };
            render_screen::<E>(Operation::Delete, StatusCode::OK, Some(notice), "")
        }
        Err(err) => failure::<E>(Operation::Delete, err),
    }
}

async fn search_rows<E: Screens>(
    State(state): State<AppState>,
    form: Result<Form<E::Search>, FormRejection>,
) -> Response {
    let Form(request) = match form {
        Ok(form) => form,
        Err(rejection) => return rejected::<E>(Operation::Search, rejection),
    };

    match state.controller().search(&request).await {
        Ok(rows) if rows.is_empty() => {
            let warning = Notice::Warning(not_found_message(<E as Entity>::TABLE));
            render_screen::<E>(Operation::Search, StatusCode::OK, Some(warning), "")
        }
        Ok(rows) => render_screen::<E>(Operation::Search, StatusCode::OK, None, &render_rows(&rows)),
        Err(err) => failure::<E>(Operation::Search, err),
    }
}
