use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::repository::*;

/// Player and statistic repositories sharing one store transaction.
#[async_trait::async_trait]
pub trait UnitOfWork<'a>: Send + Sync {
    fn players(&self) -> Arc<dyn PlayerRepository + 'a>;
    fn stats(&self) -> Arc<dyn PlayerStatRepository + 'a>;

    // Both consume the box: nothing can touch the transaction afterwards.
    async fn commit(self: Box<Self>) -> Result<(), ApplicationError>;
    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError>;
}

/// Opens units of work.
#[async_trait::async_trait]
pub trait UnitOfWorkProvider: Send + Sync {
    /// Starts a transaction and wraps it in a unit of work.
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError>;
}
