//! ActorEntity trait implementation for the Cat domain type.
//!
//! Validation lives here because it is part of saving: `from_create_params` rejects a new cat
//! before it is stored, and `on_update` checks the new color before assigning it.

use super::error::CatError;
use crate::model::{Cat, CatCreate, CatId, CatUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

const NAME_BLANK: &str = "Name can't be blank";
const COLOR_BLANK: &str = "Color can't be blank";

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[async_trait]
impl ActorEntity for Cat {
    type Id = CatId;
    type Create = CatCreate;
    type Update = CatUpdate;
    type Context = ();
    type Error = CatError;

    /// Builds a cat from whitelisted create params.
    ///
    /// Both `name` and `color` must be present and non-blank; every failing rule is reported.
    fn from_create_params(id: CatId, params: CatCreate) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        if is_blank(params.name.as_deref()) {
            errors.push(NAME_BLANK.to_string());
        }
        if is_blank(params.color.as_deref()) {
            errors.push(COLOR_BLANK.to_string());
        }
        if !errors.is_empty() {
            return Err(CatError::ValidationFailed(errors));
        }

        Ok(Self::new(
            id,
            params.name.unwrap_or_default(),
            params.color.unwrap_or_default(),
        ))
    }

    /// Applies a color change. An update with no color is a successful no-op.
    async fn on_update(&mut self, update: CatUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(color) = update.color {
            if color.trim().is_empty() {
                return Err(CatError::ValidationFailed(vec![COLOR_BLANK.to_string()]));
            }
            self.color = color;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: Option<&str>, color: Option<&str>) -> CatCreate {
        CatCreate {
            name: name.map(String::from),
            color: color.map(String::from),
        }
    }

    #[test]
    fn test_from_create_params_accepts_name_and_color() {
        let cat = Cat::from_create_params(CatId(1), params(Some("Tom"), Some("gray"))).unwrap();
        assert_eq!(cat, Cat::new(CatId(1), "Tom", "gray"));
    }

    #[test]
    fn test_from_create_params_reports_every_blank_field() {
        let err = Cat::from_create_params(CatId(1), params(None, Some("  "))).unwrap_err();
        assert_eq!(
            err,
            CatError::ValidationFailed(vec![NAME_BLANK.into(), COLOR_BLANK.into()])
        );
    }

    #[tokio::test]
    async fn test_on_update_changes_color_only() {
        let mut cat = Cat::new(CatId(1), "Tom", "gray");
        let update = CatUpdate {
            color: Some("white".into()),
        };
        cat.on_update(update, &()).await.unwrap();
        assert_eq!(cat, Cat::new(CatId(1), "Tom", "white"));
    }

    #[tokio::test]
    async fn test_on_update_rejects_blank_color_without_assigning() {
        let mut cat = Cat::new(CatId(1), "Tom", "gray");
        let err = cat
            .on_update(
                CatUpdate {
                    color: Some(String::new()),
                },
                &(),
            )
            .await
            .unwrap_err();
        assert_eq!(err, CatError::ValidationFailed(vec![COLOR_BLANK.into()]));
        assert_eq!(cat.color, "gray");
    }

    #[tokio::test]
    async fn test_on_update_without_color_is_noop() {
        let mut cat = Cat::new(CatId(1), "Tom", "gray");
        cat.on_update(CatUpdate::default(), &()).await.unwrap();
        assert_eq!(cat, Cat::new(CatId(1), "Tom", "gray"));
    }
}
