//! Products route handlers.
//!
//! Every handler loads the session catalog, turns the request into a
//! [`CatalogIntent`], dispatches it and either redirects back to the table or
//! re-renders the table with the resulting dialog.
//!
//! Edit and remove forms post the code of the row they were opened for as
//! `expected_id`. A submission whose row has since moved or gone gets a 409.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use singsing_core::ProductFields;

use crate::{
    catalog::{
        CatalogEditor, CatalogError, CatalogIntent, CatalogPage, Dispatch, Outcome, RowRef,
        dispatch, store,
        view::{page_containing, page_href, resolve_page},
    },
    components::data_table::{DataTableConfig, products_table_config},
    error::AppError,
    filters,
    modal::{Modal, PRODUCTS_PATH},
    routes::PageChrome,
    state::AppState,
};

/// Products page template.
#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductsTemplate {
    pub chrome: PageChrome,
    pub table_config: DataTableConfig,
    pub page: CatalogPage,
    /// Shown above the table when a rejected request left no dialog open.
    pub notice: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Edit form: the product fields plus the code of the row being edited.
#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub expected_id: String,
    #[serde(flatten)]
    pub fields: ProductFields,
}

/// Remove confirmation form.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub expected_id: String,
}

/// Status for a page re-rendered after a rejected form.
const fn rejection_status(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::BlankName => StatusCode::UNPROCESSABLE_ENTITY,
        CatalogError::DuplicateId(_) | CatalogError::RowChanged { .. } => StatusCode::CONFLICT,
        CatalogError::PositionOutOfRange { .. } => StatusCode::NOT_FOUND,
    }
}

/// Load the session catalog, apply `intent` and save if it changed.
async fn apply(
    state: &AppState,
    session: &Session,
    intent: CatalogIntent,
) -> Result<(CatalogEditor, Dispatch), AppError> {
    let mut editor = store::load(session, state.catalog_settings()).await?;
    let result = dispatch(&mut editor, intent)?;
    if result.changed() {
        store::save(session, &editor).await?;
    }
    Ok((editor, result))
}

/// Render the table with `modal` over it.
///
/// A dialog about a row shows the page holding that row; otherwise the
/// requested page is shown.
async fn render_page(
    state: &AppState,
    session: &Session,
    editor: &CatalogEditor,
    modal: &Modal,
    requested_page: Option<&str>,
    notice: Option<String>,
) -> Result<Html<String>, AppError> {
    let chrome = PageChrome::load(state, session, "Products", "products", PRODUCTS_PATH)
        .await?
        .with_modal(modal.view(&editor.next_default_id()));
    let view = editor.render();
    let number = modal
        .position()
        .map_or_else(|| resolve_page(requested_page, view.page_count()), page_containing);

    let template = ProductsTemplate {
        chrome,
        table_config: products_table_config(),
        page: view.into_page(number),
        notice,
    };
    Ok(Html(template.render()?))
}

/// Where to send the browser after a successful change: the page that shows
/// the affected position.
fn redirect_after(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Created { position, .. }
        | Outcome::Updated { position }
        | Outcome::Removed { position, .. } => page_href(page_containing(*position)),
        Outcome::Unchanged | Outcome::Rejected(_) => PRODUCTS_PATH.to_string(),
    }
}

/// Render the outcome of a dispatched intent: redirect on success, or the
/// page with the dialog still open after a rejection.
async fn respond(
    state: &AppState,
    session: &Session,
    editor: &CatalogEditor,
    result: Dispatch,
) -> Result<Response, AppError> {
    match result.rejection() {
        None => Ok(Redirect::to(&redirect_after(&result.outcome)).into_response()),
        Some(err) => {
            let status = rejection_status(err);
            let notice = (result.modal == Modal::Closed).then(|| err.to_string());
            let page = render_page(state, session, editor, &result.modal, None, notice).await?;
            Ok((status, page).into_response())
        }
    }
}

/// Products table, no dialog.
///
/// GET /products?page=
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let (editor, result) = apply(&state, &session, CatalogIntent::Cancel).await?;
    render_page(&state, &session, &editor, &result.modal, query.page.as_deref(), None).await
}

/// Products table with the create form open.
///
/// GET /products/new
#[instrument(skip(state, session))]
pub async fn new(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let (editor, result) = apply(&state, &session, CatalogIntent::OpenCreate).await?;
    render_page(&state, &session, &editor, &result.modal, None, None).await
}

/// Create a product.
///
/// POST /products
#[instrument(skip(state, session, fields))]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Form(fields): Form<ProductFields>,
) -> Result<Response, AppError> {
    let (editor, result) = apply(&state, &session, CatalogIntent::SubmitCreate(fields)).await?;
    respond(&state, &session, &editor, result).await
}

/// Products table with the edit form open.
///
/// GET /products/{position}/edit
#[instrument(skip(state, session))]
pub async fn edit(
    State(state): State<AppState>,
    session: Session,
    Path(position): Path<usize>,
) -> Result<Html<String>, AppError> {
    let (editor, result) = apply(&state, &session, CatalogIntent::OpenEdit(position)).await?;
    render_page(&state, &session, &editor, &result.modal, None, None).await
}

/// Replace a product.
///
/// POST /products/{position}
#[instrument(skip(state, session, form))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(position): Path<usize>,
    Form(form): Form<EditForm>,
) -> Result<Response, AppError> {
    let target = RowRef::new(position, form.expected_id);
    let (editor, result) =
        apply(&state, &session, CatalogIntent::SubmitEdit(target, form.fields)).await?;
    respond(&state, &session, &editor, result).await
}

/// Products table with the remove confirmation open.
///
/// GET /products/{position}/remove
#[instrument(skip(state, session))]
pub async fn remove_page(
    State(state): State<AppState>,
    session: Session,
    Path(position): Path<usize>,
) -> Result<Html<String>, AppError> {
    let (editor, result) = apply(&state, &session, CatalogIntent::OpenRemove(position)).await?;
    render_page(&state, &session, &editor, &result.modal, None, None).await
}

/// Remove a product after confirmation.
///
/// POST /products/{position}/remove
#[instrument(skip(state, session, form))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(position): Path<usize>,
    Form(form): Form<RemoveForm>,
) -> Result<Response, AppError> {
    let target = RowRef::new(position, form.expected_id);
    let (editor, result) = apply(&state, &session, CatalogIntent::ConfirmRemove(target)).await?;
    respond(&state, &session, &editor, result).await
}

/// Restore the sample rows.
///
/// POST /products/reset
#[instrument(skip(session))]
pub async fn reset(session: Session) -> Result<Redirect, AppError> {
    store::reset(&session).await?;
    tracing::info!("Catalog reset to sample rows");
    Ok(Redirect::to(PRODUCTS_PATH))
}
