use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    uow::UnitOfWorkProvider,
};

/// Dispatches roster and statistics commands and queries to their
/// handlers, each inside its own unit of work.
pub struct AppBus {
    config: Arc<Config>,
    uow_provider: Arc<dyn UnitOfWorkProvider>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, uow_provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            config,
            uow_provider,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Runs a command that changes the roster or the statistics. Its unit
    /// of work is committed when the handler returns `Ok` and rolled back
    /// otherwise.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<C::Output, ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let uow = self.uow_provider.begin().await?;

        match handler.handle(cmd, &uow, &self.config).await {
            Ok(output) => {
                uow.commit().await?;
                Ok(output)
            }
            Err(e) => {
                uow.rollback().await?;
                Err(e)
            }
        }
    }

    /// Runs a read-only query. Its unit of work is always rolled back.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let uow = self.uow_provider.begin().await?;

        let result = handler.handle(query, &uow, &self.config).await;

        uow.rollback().await?;

        result
    }
}
