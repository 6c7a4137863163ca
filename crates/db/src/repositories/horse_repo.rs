//! Repository for the `horses` table.

use sqlx::PgPool;
use studbook_core::types::DbId;

use crate::models::horse::{CreateHorse, DeleteResult, Horse, UpdateHorse, UpdateResult};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, father, mother, gender, coat, birth, owner, book, register, \
    alive, blocked, created_at, updated_at";

/// Provides CRUD and pedigree lookups for horses.
pub struct HorseRepo;

impl HorseRepo {
    /// List every registered horse, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Horse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM horses ORDER BY name, id");
        sqlx::query_as::<_, Horse>(&query).fetch_all(pool).await
    }

    /// Find a horse by its internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Horse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM horses WHERE id = $1");
        sqlx::query_as::<_, Horse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find horses whose name matches `name`, ignoring case.
    ///
    /// Names are not unique: homonyms from different breeders coexist.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Vec<Horse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM horses WHERE LOWER(name) = LOWER($1) ORDER BY id");
        sqlx::query_as::<_, Horse>(&query)
            .bind(name)
            .fetch_all(pool)
            .await
    }

    /// Page through the offspring of the horse called `parent`.
    ///
    /// A horse is offspring when either its `father` or its `mother`
    /// matches, ignoring case.
    pub async fn find_by_parent(
        pool: &PgPool,
        parent: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Horse>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM horses \
             WHERE LOWER(father) = LOWER($1) OR LOWER(mother) = LOWER($1) \
             ORDER BY name, id \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Horse>(&query)
            .bind(parent)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Insert a new horse, returning the created row.
    ///
    /// If `alive` / `blocked` are `None`, the database defaults apply. A
    /// missing `name` violates the `NOT NULL` constraint.
    pub async fn create(pool: &PgPool, input: &CreateHorse) -> Result<Horse, sqlx::Error> {
        let query = format!(
            "INSERT INTO horses \
                 (name, father, mother, gender, coat, birth, owner, book, register, alive, blocked) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, true), COALESCE($11, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Horse>(&query)
            .bind(&input.name)
            .bind(&input.father)
            .bind(&input.mother)
            .bind(&input.gender)
            .bind(&input.coat)
            .bind(input.birth)
            .bind(&input.owner)
            .bind(&input.book)
            .bind(&input.register)
            .bind(input.alive)
            .bind(input.blocked)
            .fetch_one(pool)
            .await
    }

    /// Update a horse, reporting how many rows matched and changed.
    ///
    /// Absent fields keep their stored value. A nullable field supplied as
    /// `Some(None)` is cleared. A row whose stored values already equal the
    /// resulting ones counts as matched but not modified, and its
    /// `updated_at` is left alone.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHorse,
    ) -> Result<UpdateResult, sqlx::Error> {
        let (father_set, father) = provided(&input.father);
        let (mother_set, mother) = provided(&input.mother);
        let (gender_set, gender) = provided(&input.gender);
        let (coat_set, coat) = provided(&input.coat);
        let (birth_set, birth) = provided(&input.birth);
        let (owner_set, owner) = provided(&input.owner);
        let (book_set, book) = provided(&input.book);
        let (register_set, register) = provided(&input.register);

        sqlx::query_as::<_, UpdateResult>(
            "WITH target AS ( \
                 SELECT * FROM horses WHERE id = $1 \
             ), \
             proposed AS ( \
                 SELECT id, \
                     COALESCE($2, name) AS name, \
                     CASE WHEN $3 THEN $4 ELSE father END AS father, \
                     CASE WHEN $5 THEN $6 ELSE mother END AS mother, \
                     CASE WHEN $7 THEN $8 ELSE gender END AS gender, \
                     CASE WHEN $9 THEN $10 ELSE coat END AS coat, \
                     CASE WHEN $11 THEN $12 ELSE birth END AS birth, \
                     CASE WHEN $13 THEN $14 ELSE owner END AS owner, \
                     CASE WHEN $15 THEN $16 ELSE book END AS book, \
                     CASE WHEN $17 THEN $18 ELSE register END AS register, \
                     COALESCE($19, alive) AS alive, \
                     COALESCE($20, blocked) AS blocked \
                 FROM target \
             ), \
             updated AS ( \
                 UPDATE horses h SET \
                     name = p.name, father = p.father, mother = p.mother, \
                     gender = p.gender, coat = p.coat, birth = p.birth, \
                     owner = p.owner, book = p.book, register = p.register, \
                     alive = p.alive, blocked = p.blocked \
                 FROM proposed p \
                 WHERE h.id = p.id \
                   AND (h.name, h.father, h.mother, h.gender, h.coat, h.birth, \
                        h.owner, h.book, h.register, h.alive, h.blocked) \
                       IS DISTINCT FROM \
                       (p.name, p.father, p.mother, p.gender, p.coat, p.birth, \
                        p.owner, p.book, p.register, p.alive, p.blocked) \
                 RETURNING h.id \
             ) \
             SELECT \
                 (SELECT COUNT(*) FROM target) AS matched_count, \
                 (SELECT COUNT(*) FROM updated) AS modified_count",
        )
        .bind(id)
        .bind(&input.name)
        .bind(father_set)
        .bind(father)
        .bind(mother_set)
        .bind(mother)
        .bind(gender_set)
        .bind(gender)
        .bind(coat_set)
        .bind(coat)
        .bind(birth_set)
        .bind(birth)
        .bind(owner_set)
        .bind(owner)
        .bind(book_set)
        .bind(book)
        .bind(register_set)
        .bind(register)
        .bind(input.alive)
        .bind(input.blocked)
        .fetch_one(pool)
        .await
    }

    /// Hard-delete a horse by id.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<DeleteResult, sqlx::Error> {
        let result = sqlx::query("DELETE FROM horses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(DeleteResult {
            deleted_count: result.rows_affected(),
        })
    }
}

/// Split a clearable field into "was it supplied" and its new value.
fn provided<T>(field: &Option<Option<T>>) -> (bool, Option<&T>) {
    (field.is_some(), field.as_ref().and_then(Option::as_ref))
}
