use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// The actor only persists orders; validation, pricing and stock movements happen in
/// the [`OrderEngine`](crate::engine::OrderEngine) before [`OrderClient::place`] is called.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Persists a new order and returns the stored record, id included.
    #[instrument(skip(self, params), fields(user_id = %params.user_id, item = %params.item_name))]
    pub async fn place(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "place called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        let order = self
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        info!(order_id = %id, "Order persisted");
        Ok(order)
    }

    /// Moves the order to its next status and returns the updated record.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderId) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Advance)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_order_error(e)
    }
}

pub(crate) fn map_order_error(e: FrameworkError) -> OrderError {
    match e.downcast_entity::<OrderError>() {
        Ok(typed) => typed,
        Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
        Err(other) => OrderError::ActorCommunicationError(other.to_string()),
    }
}
