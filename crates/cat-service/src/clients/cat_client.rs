//! # Cat Client
//!
//! High-level API over a `ResourceClient<Cat>`. This is the persistence collaborator the
//! controller talks to: `list` and `get` come from [`ActorClient`], creation and updates are
//! defined here.
use crate::cat_actor::CatError;
use crate::model::{Cat, CatCreate, CatId, CatUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cat actor.
#[derive(Clone)]
pub struct CatClient {
    inner: ResourceClient<Cat>,
}

impl CatClient {
    pub fn new(inner: ResourceClient<Cat>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cat> for CatClient {
    type Error = CatError;

    fn inner(&self) -> &ResourceClient<Cat> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatError::from(e)
    }
}

impl CatClient {
    /// Looks up a cat, turning a missing record into [`CatError::NotFound`].
    #[instrument(skip(self))]
    pub async fn find(&self, id: CatId) -> Result<Cat, CatError> {
        self.get(id)
            .await?
            .ok_or_else(|| CatError::NotFound(id.to_string()))
    }

    /// Validates and saves a new cat, returning its assigned id.
    #[instrument(skip(self))]
    pub async fn create_cat(&self, params: CatCreate) -> Result<CatId, CatError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(CatError::from)
    }

    /// Validates and saves a color change, returning the stored cat.
    #[instrument(skip(self))]
    pub async fn update_cat(&self, id: CatId, update: CatUpdate) -> Result<Cat, CatError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(CatError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_create, expect_get, MockClient};

    #[tokio::test]
    async fn test_create_cat_forwards_whitelisted_params() {
        let (client, mut receiver) = create_mock_client::<Cat>(10);
        let cat_client = CatClient::new(client);

        let create_task = tokio::spawn(async move {
            cat_client
                .create_cat(CatCreate {
                    name: Some("Tom".into()),
                    color: Some("gray".into()),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name.as_deref(), Some("Tom"));
        assert_eq!(params.color.as_deref(), Some("gray"));
        responder.send(Ok(CatId(1))).unwrap();

        assert_eq!(create_task.await.unwrap().unwrap(), CatId(1));
    }

    #[tokio::test]
    async fn test_create_cat_surfaces_validation_errors() {
        let (client, mut receiver) = create_mock_client::<Cat>(10);
        let cat_client = CatClient::new(client);

        let create_task =
            tokio::spawn(async move { cat_client.create_cat(CatCreate::default()).await });

        let (_, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                CatError::ValidationFailed(vec!["Name can't be blank".into()]),
            ))))
            .unwrap();

        assert_eq!(
            create_task.await.unwrap(),
            Err(CatError::ValidationFailed(vec!["Name can't be blank".into()]))
        );
    }

    #[tokio::test]
    async fn test_find_missing_cat_is_not_found() {
        let (client, mut receiver) = create_mock_client::<Cat>(10);
        let cat_client = CatClient::new(client);

        let find_task = tokio::spawn(async move { cat_client.find(CatId(9)).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, CatId(9));
        responder.send(Ok(None)).unwrap();

        assert_eq!(
            find_task.await.unwrap(),
            Err(CatError::NotFound("9".into()))
        );
    }

    #[tokio::test]
    async fn test_list_maps_closed_actor() {
        let mut mock = MockClient::<Cat>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let cat_client = CatClient::new(mock.client());
        let result = cat_client.list().await;
        assert!(matches!(result, Err(CatError::ActorCommunicationError(_))));
        mock.verify();
    }
}
