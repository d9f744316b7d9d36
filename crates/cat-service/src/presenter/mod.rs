//! # Presenter
//!
//! The presentation collaborator: turns a controller [`Reply`] into an HTTP response. The
//! controller never builds responses itself, so another presenter (JSON, for instance) can be
//! slotted in behind the same router.

use crate::controller::{ControllerError, Reply, View};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::{context, Environment};
use tracing::{error, warn};

pub trait Presenter: Send + Sync + 'static {
    fn render(&self, view: &View) -> Response;

    /// `303 See Other` to `location`.
    fn redirect(&self, location: &str) -> Response {
        Redirect::to(location).into_response()
    }

    fn not_found(&self, what: &str) -> Response {
        (StatusCode::NOT_FOUND, format!("Not found: {what}")).into_response()
    }

    fn error(&self, err: &ControllerError) -> Response {
        match err {
            ControllerError::NotFound(what) => self.not_found(what),
            other => other.clone().into_response(),
        }
    }

    fn present(&self, reply: Reply) -> Response {
        match reply {
            Reply::Render(view) => self.render(&view),
            Reply::Redirect(location) => self.redirect(&location),
        }
    }
}

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("show.html", include_str!("../templates/show.html")),
    ("new.html", include_str!("../templates/new.html")),
    ("edit.html", include_str!("../templates/edit.html")),
    ("_form.html", include_str!("../templates/_form.html")),
    ("error.html", include_str!("../templates/error.html")),
];

/// Renders views with the embedded minijinja templates. Output is HTML-escaped.
pub struct HtmlPresenter {
    env: Environment<'static>,
}

impl HtmlPresenter {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    fn render_template(
        &self,
        name: &str,
        status: StatusCode,
        ctx: minijinja::Value,
    ) -> Response {
        let rendered = self
            .env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(ctx));
        match rendered {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                error!(template = name, error = %e, "Template render failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl Presenter for HtmlPresenter {
    fn render(&self, view: &View) -> Response {
        let status = if view.has_errors() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::OK
        };

        match view {
            View::Index { cats } => self.render_template("index.html", status, context! { cats }),
            View::Show { cat } => self.render_template("show.html", status, context! { cat }),
            View::New { form } => self.render_template("new.html", status, context! { form }),
            View::Edit { form } => self.render_template("edit.html", status, context! { form }),
        }
    }

    fn not_found(&self, what: &str) -> Response {
        self.render_template(
            "error.html",
            StatusCode::NOT_FOUND,
            context! { status => "Not Found", message => format!("Not found: {what}") },
        )
    }

    fn error(&self, err: &ControllerError) -> Response {
        let status = err.status();
        match err {
            ControllerError::NotFound(what) => return self.not_found(what),
            ControllerError::Unavailable(msg) => {
                error!(error = %msg, "Persistence unavailable");
            }
            other => warn!(error = %other, "Request rejected"),
        }
        self.render_template(
            "error.html",
            status,
            context! {
                status => status.canonical_reason().unwrap_or("Error"),
                message => err.to_string(),
            },
        )
    }
}
