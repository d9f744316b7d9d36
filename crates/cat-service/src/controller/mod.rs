//! # Cats Controller
//!
//! The resource handler for cats. Each action is one request/response transaction:
//! whitelist the input, call the persistence collaborator ([`CatClient`]), and return a
//! [`Reply`] for the presentation collaborator to turn into HTTP.
//!
//! | Action | Persistence call | Reply |
//! |---|---|---|
//! | [`index`](CatsController::index) | `list` | `Render(Index)` |
//! | [`show`](CatsController::show) | `find` | `Render(Show)` |
//! | [`new_form`](CatsController::new_form) | - | `Render(New)` |
//! | [`create`](CatsController::create) | `create_cat` | `Redirect` or `Render(New)` with errors |
//! | [`edit_form`](CatsController::edit_form) | `find` | `Render(Edit)` |
//! | [`update`](CatsController::update) | `find`, `update_cat` | `Redirect` or `Render(Edit)` with errors |
//!
//! A rejected save never redirects: the form comes back with the submitted values and the
//! validation messages.

pub mod error;

pub use error::*;

use crate::cat_actor::CatError;
use crate::clients::CatClient;
use crate::model::{cat_path, Cat, CatCreate, CatId, CatUpdate};
use crate::params::{permit, require, RawParams};
use actor_framework::ActorClient;
use serde::Serialize;
use tracing::{info, instrument};

/// Root key every create/update body must carry.
pub const PARAM_KEY: &str = "cat";
/// Fields a client may assign when creating a cat.
pub const CREATE_FIELDS: &[&str] = &["name", "color"];
/// Fields a client may assign when updating a cat.
pub const UPDATE_FIELDS: &[&str] = &["color"];

/// What the presenter should do with an action's result.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Render(View),
    /// Redirect to a resource URL.
    Redirect(String),
}

/// A view plus the data bound to it.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Index { cats: Vec<Cat> },
    Show { cat: Cat },
    New { form: CatForm },
    Edit { form: CatForm },
}

impl View {
    /// True when the view is a form being shown back with validation errors.
    pub fn has_errors(&self) -> bool {
        match self {
            View::New { form } | View::Edit { form } => !form.errors.is_empty(),
            View::Index { .. } | View::Show { .. } => false,
        }
    }
}

/// Form state for the new and edit views.
///
/// `id` is `None` until the cat has been persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatForm {
    pub id: Option<CatId>,
    pub name: String,
    pub color: String,
    pub errors: Vec<String>,
}

impl From<&Cat> for CatForm {
    fn from(cat: &Cat) -> Self {
        Self {
            id: Some(cat.id),
            name: cat.name.clone(),
            color: cat.color.clone(),
            errors: Vec::new(),
        }
    }
}

/// Resource handler for `/cats`. Holds no per-request state.
#[derive(Clone)]
pub struct CatsController {
    cats: CatClient,
}

impl CatsController {
    pub fn new(cats: CatClient) -> Self {
        Self { cats }
    }

    /// All cats, in id order.
    #[instrument(skip(self))]
    pub async fn index(&self) -> Result<Reply, ControllerError> {
        let cats = self.cats.list().await?;
        Ok(Reply::Render(View::Index { cats }))
    }

    #[instrument(skip(self))]
    pub async fn show(&self, id: CatId) -> Result<Reply, ControllerError> {
        let cat = self.cats.find(id).await?;
        Ok(Reply::Render(View::Show { cat }))
    }

    /// An empty, unpersisted cat for the creation form.
    pub fn new_form(&self) -> Reply {
        Reply::Render(View::New {
            form: CatForm::default(),
        })
    }

    /// Creates a cat from `cat[name]` and `cat[color]`; every other field is dropped.
    #[instrument(skip(self, raw))]
    pub async fn create(&self, raw: &RawParams) -> Result<Reply, ControllerError> {
        let mut permitted = permit(require(raw, PARAM_KEY)?, CREATE_FIELDS);
        let params = CatCreate {
            name: permitted.take("name"),
            color: permitted.take("color"),
        };

        match self.cats.create_cat(params.clone()).await {
            Ok(id) => {
                info!(%id, "Cat created");
                Ok(Reply::Redirect(cat_path(id)))
            }
            Err(CatError::ValidationFailed(errors)) => Ok(Reply::Render(View::New {
                form: CatForm {
                    id: None,
                    name: params.name.unwrap_or_default(),
                    color: params.color.unwrap_or_default(),
                    errors,
                },
            })),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn edit_form(&self, id: CatId) -> Result<Reply, ControllerError> {
        let cat = self.cats.find(id).await?;
        Ok(Reply::Render(View::Edit {
            form: CatForm::from(&cat),
        }))
    }

    /// Changes a cat's color from `cat[color]`; `name` and every other field are dropped.
    ///
    /// The cat is looked up before the body is inspected, so an unknown id is `NotFound` even
    /// when the body is also invalid.
    #[instrument(skip(self, raw))]
    pub async fn update(&self, id: CatId, raw: &RawParams) -> Result<Reply, ControllerError> {
        let cat = self.cats.find(id).await?;

        let mut permitted = permit(require(raw, PARAM_KEY)?, UPDATE_FIELDS);
        let update = CatUpdate {
            color: permitted.take("color"),
        };

        match self.cats.update_cat(id, update.clone()).await {
            Ok(updated) => {
                info!(%id, "Cat updated");
                Ok(Reply::Redirect(updated.path()))
            }
            Err(CatError::ValidationFailed(errors)) => {
                let mut form = CatForm::from(&cat);
                if let Some(color) = update.color {
                    form.color = color;
                }
                form.errors = errors;
                Ok(Reply::Render(View::Edit { form }))
            }
            Err(e) => Err(e.into()),
        }
    }
}
