//! # Routes
//!
//! The explicit route table for `/cats` and the axum [`Router`] built from it.
//!
//! Every entry in [`ROUTES`] maps one verb and path to one controller action. Entries sharing
//! a path are merged into a single method router, so a verb that is not listed for a path gets
//! `405 Method Not Allowed` and an unknown path gets the presenter's not-found page.
//!
//! HTML forms can only `POST`, so `POST /cats/:id` honours a `_method` field of `patch` or
//! `put` and rejects anything else with 405.

use crate::controller::{CatsController, ControllerError, Reply};
use crate::model::CatId;
use crate::params::{from_form_pairs, ParamsError, RawParams};
use crate::presenter::Presenter;
use async_trait::async_trait;
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::Uri;
use axum::response::Response;
use axum::routing::{on, MethodFilter, MethodRouter};
use axum::{Form, Json, Router};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Put,
}

impl Verb {
    pub fn filter(self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
            Verb::Patch => MethodFilter::PATCH,
            Verb::Put => MethodFilter::PUT,
        }
    }
}

impl Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Patch => "PATCH",
            Verb::Put => "PUT",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Index,
    New,
    Show,
    Edit,
    Create,
    Update,
    /// `POST /cats/:id` carrying a `_method` override.
    UpdateViaForm,
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Index => "index",
            Action::New => "new",
            Action::Show => "show",
            Action::Edit => "edit",
            Action::Create => "create",
            Action::Update => "update",
            Action::UpdateViaForm => "update (_method override)",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub verb: Verb,
    pub path: &'static str,
    pub action: Action,
}

const fn route(verb: Verb, path: &'static str, action: Action) -> Route {
    Route { verb, path, action }
}

pub static ROUTES: &[Route] = &[
    route(Verb::Get, "/cats", Action::Index),
    route(Verb::Get, "/cats/new", Action::New),
    route(Verb::Get, "/cats/:id", Action::Show),
    route(Verb::Get, "/cats/:id/edit", Action::Edit),
    route(Verb::Post, "/cats", Action::Create),
    route(Verb::Patch, "/cats/:id", Action::Update),
    route(Verb::Put, "/cats/:id", Action::Update),
    route(Verb::Post, "/cats/:id", Action::UpdateViaForm),
];

/// [`ROUTES`] as an aligned, human-readable table.
pub fn route_table() -> String {
    ROUTES
        .iter()
        .map(|r| format!("{:<6} {:<15} {}\n", r.verb, r.path, r.action))
        .collect()
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub controller: CatsController,
    pub presenter: Arc<dyn Presenter>,
}

impl AppState {
    pub fn new(controller: CatsController, presenter: impl Presenter) -> Self {
        Self {
            controller,
            presenter: Arc::new(presenter),
        }
    }

    fn respond(&self, result: Result<Reply, ControllerError>) -> Response {
        match result {
            Ok(reply) => self.presenter.present(reply),
            Err(e) => self.presenter.error(&e),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let mut by_path: BTreeMap<&'static str, MethodRouter<AppState>> = BTreeMap::new();
    for r in ROUTES {
        let endpoint = method_router(r);
        let merged = match by_path.remove(r.path) {
            Some(existing) => existing.merge(endpoint),
            None => endpoint,
        };
        by_path.insert(r.path, merged);
    }

    by_path
        .into_iter()
        .fold(Router::new(), |router, (path, endpoint)| {
            router.route(path, endpoint)
        })
        .fallback(fallback)
        .with_state(state)
}

fn method_router(r: &Route) -> MethodRouter<AppState> {
    let filter = r.verb.filter();
    match r.action {
        Action::Index => on(filter, index),
        Action::New => on(filter, new_form),
        Action::Show => on(filter, show),
        Action::Edit => on(filter, edit_form),
        Action::Create => on(filter, create),
        Action::Update => on(filter, update),
        Action::UpdateViaForm => on(filter, update_via_form),
    }
}

/// Request parameters decoded from a JSON object or an urlencoded form.
pub struct Params(pub RawParams);

#[async_trait]
impl FromRequest<AppState> for Params {
    type Rejection = Response;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let malformed = |msg: String| state.presenter.error(&ParamsError::Malformed(msg).into());

        if is_json {
            let Json(value) = Json::<Value>::from_request(req, state)
                .await
                .map_err(|e| malformed(e.body_text()))?;
            match value {
                Value::Object(raw) => Ok(Params(raw)),
                _ => Err(malformed("expected a JSON object".to_string())),
            }
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| malformed(e.body_text()))?;
            from_form_pairs(pairs)
                .map(Params)
                .map_err(|e| state.presenter.error(&e.into()))
        }
    }
}

/// Ids that do not parse can never match a record.
fn parse_id(raw: &str) -> Result<CatId, ControllerError> {
    raw.parse()
        .map_err(|_| ControllerError::NotFound(raw.to_string()))
}

async fn index(State(state): State<AppState>) -> Response {
    state.respond(state.controller.index().await)
}

async fn new_form(State(state): State<AppState>) -> Response {
    state.respond(Ok(state.controller.new_form()))
}

async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = match parse_id(&id) {
        Ok(id) => state.controller.show(id).await,
        Err(e) => Err(e),
    };
    state.respond(result)
}

async fn edit_form(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = match parse_id(&id) {
        Ok(id) => state.controller.edit_form(id).await,
        Err(e) => Err(e),
    };
    state.respond(result)
}

async fn create(State(state): State<AppState>, Params(raw): Params) -> Response {
    state.respond(state.controller.create(&raw).await)
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Params(raw): Params,
) -> Response {
    let result = match parse_id(&id) {
        Ok(id) => state.controller.update(id, &raw).await,
        Err(e) => Err(e),
    };
    state.respond(result)
}

async fn update_via_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Params(raw): Params,
) -> Response {
    let method = raw
        .get("_method")
        .and_then(Value::as_str)
        .map(str::to_ascii_lowercase);

    match method.as_deref() {
        Some("patch") | Some("put") => {
            debug!(?method, "Method override");
            update(State(state), Path(id), Params(raw)).await
        }
        other => {
            let err = ControllerError::MethodNotAllowed(other.unwrap_or("post").to_uppercase());
            state.presenter.error(&err)
        }
    }
}

async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    state.presenter.not_found(uri.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_update_verb_targets_the_member_path() {
        let updates: Vec<_> = ROUTES
            .iter()
            .filter(|r| matches!(r.action, Action::Update | Action::UpdateViaForm))
            .map(|r| (r.verb, r.path))
            .collect();

        assert_eq!(
            updates,
            vec![
                (Verb::Patch, "/cats/:id"),
                (Verb::Put, "/cats/:id"),
                (Verb::Post, "/cats/:id"),
            ]
        );
    }

    #[test]
    fn test_route_table_lists_each_route_once() {
        let table = route_table();
        assert_eq!(table.lines().count(), ROUTES.len());
        assert!(table.contains("GET    /cats/new       new"));
        assert!(table.contains("POST   /cats           create"));
    }

    #[test]
    fn test_parse_id_rejects_non_numeric_ids_as_not_found() {
        assert_eq!(parse_id("12"), Ok(CatId(12)));
        assert_eq!(
            parse_id("abc"),
            Err(ControllerError::NotFound("abc".into()))
        );
        assert_eq!(parse_id("-1"), Err(ControllerError::NotFound("-1".into())));
    }
}
