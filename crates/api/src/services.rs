//! Horse Data Service: the persistence collaborator behind the handlers.
//!
//! Handlers only see the [`HorseService`] trait object held in
//! [`AppState`](crate::state::AppState). Production wires in
//! [`PgHorseService`]; integration tests substitute in-memory doubles.

use async_trait::async_trait;
use studbook_core::types::DbId;
use studbook_db::models::horse::{CreateHorse, DeleteResult, Horse, UpdateHorse, UpdateResult};
use studbook_db::repositories::HorseRepo;
use studbook_db::DbPool;

/// CRUD and pedigree queries over horse records.
///
/// Every method may fail with a [`sqlx::Error`]; handlers surface any such
/// failure as a 500 without retrying.
#[async_trait]
pub trait HorseService: Send + Sync {
    /// Every registered horse.
    async fn list(&self) -> Result<Vec<Horse>, sqlx::Error>;

    /// The horse with `id`, if any.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Horse>, sqlx::Error>;

    /// Horses registered under `name`.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Horse>, sqlx::Error>;

    /// One page of the offspring of the horse called `parent`.
    async fn find_by_parent(
        &self,
        parent: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Horse>, sqlx::Error>;

    /// Register a new horse.
    async fn create(&self, input: &CreateHorse) -> Result<Horse, sqlx::Error>;

    /// Apply `input` to the horse with `id`.
    async fn update(&self, id: DbId, input: &UpdateHorse) -> Result<UpdateResult, sqlx::Error>;

    /// Remove the horse with `id`.
    async fn delete(&self, id: DbId) -> Result<DeleteResult, sqlx::Error>;

    /// Liveness probe for the backing store.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// [`HorseService`] backed by PostgreSQL through [`HorseRepo`].
#[derive(Clone)]
pub struct PgHorseService {
    pool: DbPool,
}

impl PgHorseService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HorseService for PgHorseService {
    async fn list(&self) -> Result<Vec<Horse>, sqlx::Error> {
        HorseRepo::list(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Horse>, sqlx::Error> {
        HorseRepo::find_by_id(&self.pool, id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Horse>, sqlx::Error> {
        HorseRepo::find_by_name(&self.pool, name).await
    }

    async fn find_by_parent(
        &self,
        parent: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Horse>, sqlx::Error> {
        HorseRepo::find_by_parent(&self.pool, parent, limit, offset).await
    }

    async fn create(&self, input: &CreateHorse) -> Result<Horse, sqlx::Error> {
        HorseRepo::create(&self.pool, input).await
    }

    async fn update(&self, id: DbId, input: &UpdateHorse) -> Result<UpdateResult, sqlx::Error> {
        HorseRepo::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<DeleteResult, sqlx::Error> {
        HorseRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        studbook_db::health_check(&self.pool).await
    }
}
