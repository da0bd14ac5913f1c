use crate::clients::actor_client::ActorClient;
use crate::clients::order_client::map_order_error;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{TableOrder, TableOrderCreate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the TableOrder actor.
#[derive(Clone)]
pub struct TableOrderClient {
    inner: ResourceClient<TableOrder>,
}

impl TableOrderClient {
    pub fn new(inner: ResourceClient<TableOrder>) -> Self {
        Self { inner }
    }

    /// Persists a table order built from already placed members.
    #[instrument(skip(self, params), fields(user_id = %params.user_id, members = params.members.len()))]
    pub async fn place(&self, params: TableOrderCreate) -> Result<TableOrder, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        let table = self
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        info!(table_order_id = %id, total = %table.total_cost, "Table order persisted");
        Ok(table)
    }
}

#[async_trait]
impl ActorClient<TableOrder> for TableOrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<TableOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_order_error(e)
    }
}
