use crate::modules::clients::core::client::{Client, ClientPatch, NewClient};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::{Clock, EntityId};
use crate::shared::infrastructure::entity_store::EntityStore;
use std::sync::Arc;

pub struct ClientsHandler<TStore>
where
    TStore: EntityStore<Client> + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
}

impl<TStore> ClientsHandler<TStore>
where
    TStore: EntityStore<Client> + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn get_all(&self) -> Result<Vec<Client>, ApplicationError> {
        Ok(self.store.get_all().await?)
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Client>, ApplicationError> {
        let clients = self.store.get_all().await?;
        Ok(clients
            .into_iter()
            .filter(|client| client.matches_search(term))
            .collect())
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Client, ApplicationError> {
        Ok(self.store.get_by_id(id).await?)
    }

    #[tracing::instrument(skip_all)]
    pub async fn create(&self, mut draft: NewClient) -> Result<Client, ApplicationError> {
        if draft.created_at.is_none() {
            draft.created_at = Some(self.clock.now());
        }
        let client = self.store.create(draft).await?;
        tracing::info!(client_id = %client.id, "client created");
        Ok(client)
    }

    #[tracing::instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: EntityId,
        patch: ClientPatch,
    ) -> Result<Client, ApplicationError> {
        let client = self.store.update(id, patch).await?;
        tracing::info!(client_id = %id, "client updated");
        Ok(client)
    }

    /// Projects and invoices that reference the client are left in place.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: EntityId) -> Result<bool, ApplicationError> {
        let deleted = self.store.delete(id).await?;
        tracing::info!(client_id = %id, "client deleted");
        Ok(deleted)
    }
}
