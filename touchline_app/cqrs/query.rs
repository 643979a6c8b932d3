use async_trait::async_trait;
use std::sync::Arc;
use touchline_types::errors::ApplicationError;

use crate::{config::Config, uow::UnitOfWork};

/// A read of the roster or the statistics.
pub trait Query: Send + Sync {
    /// What the handler hands back.
    type Output: Send + Sync;
}

/// Answers one kind of query from the given unit of work.
#[async_trait]
pub trait QueryHandler<Q: Query> {
    async fn handle(
        &self,
        query: Q,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<Q::Output, ApplicationError>;
}
