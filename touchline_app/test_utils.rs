#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };
    use uuid::Uuid;

    use touchline_types::{
        errors::{ApplicationError, DbError},
        player::{Gender, Player, Position, Role, default_avatar_url},
        stats::{CompetitionFilter, PlayerStatistic},
    };

    use crate::{
        repository::{PlayerRepository, PlayerStatRepository},
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    /// A roster entry with sensible defaults.
    pub fn player_fixture(name: &str, role: Role) -> Player {
        Player {
            id: Uuid::new_v4(),
            name: name.to_string(),
            position: Position::Forward,
            role,
            gender: Gender::Male,
            jersey_number: None,
            image_url: Some(default_avatar_url(name)),
            created_at: Utc::now(),
        }
    }

    #[derive(Default, Clone)]
    pub struct MockPlayerRepository {
        players: Arc<Mutex<HashMap<Uuid, Player>>>,
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn list(&self) -> Result<Vec<Player>, ApplicationError> {
            let mut players: Vec<Player> = self.players.lock().unwrap().values().cloned().collect();
            players.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(players)
        }

        async fn get_by_id(&self, player_id: Uuid) -> Result<Player, ApplicationError> {
            if let Some(player) = self.players.lock().unwrap().get(&player_id) {
                Ok(player.clone())
            } else {
                Err(ApplicationError::Db(DbError::PlayerNotFound(player_id)))
            }
        }

        async fn insert(&self, player: &Player) -> Result<Player, ApplicationError> {
            let mut players = self.players.lock().unwrap();
            if players.contains_key(&player.id) {
                return Err(ApplicationError::Db(DbError::Duplicate(format!(
                    "player {}",
                    player.id
                ))));
            }
            let mut stored = player.clone();
            stored.created_at = Utc::now();
            players.insert(stored.id, stored.clone());
            Ok(stored)
        }

        async fn update(&self, player: &Player) -> Result<Player, ApplicationError> {
            let mut players = self.players.lock().unwrap();
            match players.get_mut(&player.id) {
                Some(stored) => {
                    *stored = player.clone();
                    Ok(player.clone())
                }
                None => Err(ApplicationError::Db(DbError::PlayerNotFound(player.id))),
            }
        }

        async fn delete(&self, player_id: Uuid) -> Result<(), ApplicationError> {
            match self.players.lock().unwrap().remove(&player_id) {
                Some(_) => Ok(()),
                None => Err(ApplicationError::Db(DbError::PlayerNotFound(player_id))),
            }
        }
    }

    #[derive(Default, Clone)]
    pub struct MockPlayerStatRepository {
        rows: Arc<Mutex<HashMap<Uuid, PlayerStatistic>>>,
    }

    #[async_trait]
    impl PlayerStatRepository for MockPlayerStatRepository {
        async fn list_by_season(
            &self,
            season: &str,
            competition: &CompetitionFilter,
        ) -> Result<Vec<PlayerStatistic>, ApplicationError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|r| r.season == season && competition.matches(&r.competition))
                .cloned()
                .collect())
        }

        async fn find_for_update(
            &self,
            player_id: Uuid,
            season: &str,
            competition: &str,
        ) -> Result<Option<PlayerStatistic>, ApplicationError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .find(|r| {
                    r.player_id == player_id && r.season == season && r.competition == competition
                })
                .cloned())
        }

        async fn insert_if_absent(
            &self,
            stat: &PlayerStatistic,
        ) -> Result<Option<PlayerStatistic>, ApplicationError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.contains_key(&stat.id) {
                return Err(ApplicationError::Db(DbError::Duplicate(format!(
                    "statistic {}",
                    stat.id
                ))));
            }
            let taken = rows.values().any(|r| {
                r.player_id == stat.player_id
                    && r.season == stat.season
                    && r.competition == stat.competition
            });
            if taken {
                return Ok(None);
            }
            rows.insert(stat.id, stat.clone());
            Ok(Some(stat.clone()))
        }

        async fn update(&self, stat: &PlayerStatistic) -> Result<PlayerStatistic, ApplicationError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&stat.id) {
                Some(stored) => {
                    *stored = stat.clone();
                    Ok(stat.clone())
                }
                None => Err(ApplicationError::Db(DbError::PlayerStatNotFound(stat.id))),
            }
        }

        async fn delete_by_player(&self, player_id: Uuid) -> Result<u64, ApplicationError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|_, r| r.player_id != player_id);
            Ok((before - rows.len()) as u64)
        }
    }

    #[derive(Default)]
    pub struct MockUnitOfWork {
        players: Arc<MockPlayerRepository>,
        stats: Arc<MockPlayerStatRepository>,

        // Counters shared with the provider to check commit/rollback calls
        committed: Arc<Mutex<usize>>,
        rolled_back: Arc<Mutex<usize>>,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Default::default()
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
            self.players.clone()
        }

        fn stats(&self) -> Arc<dyn PlayerStatRepository + 'a> {
            self.stats.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            *self.committed.lock().unwrap() += 1;
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            *self.rolled_back.lock().unwrap() += 1;
            Ok(())
        }
    }

    /// Hands out units of work that share the same in-memory store.
    #[derive(Default)]
    pub struct MockUnitOfWorkProvider {
        players: Arc<MockPlayerRepository>,
        stats: Arc<MockPlayerStatRepository>,
        committed: Arc<Mutex<usize>>,
        rolled_back: Arc<Mutex<usize>>,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn commits(&self) -> usize {
            *self.committed.lock().unwrap()
        }

        pub fn rollbacks(&self) -> usize {
            *self.rolled_back.lock().unwrap()
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork {
                players: self.players.clone(),
                stats: self.stats.clone(),
                committed: self.committed.clone(),
                rolled_back: self.rolled_back.clone(),
            });
            Ok(uow)
        }
    }
}
