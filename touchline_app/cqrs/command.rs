use async_trait::async_trait;
use std::sync::Arc;
use touchline_types::errors::ApplicationError;

use crate::{config::Config, uow::UnitOfWork};

/// A change to the roster or to the statistics.
pub trait Command: Send + Sync {
    /// What the command hands back once committed.
    type Output: Send + Sync;
}

/// Carries out one kind of command against the given unit of work. Commit
/// and rollback are left to [`AppBus`](crate::app::AppBus).
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<C::Output, ApplicationError>;
}
