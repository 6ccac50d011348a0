use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User record. Logins are unique and case-sensitive; the password exists
/// only as an Argon2id PHC hash.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub login: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn find_by_login(db: &PgPool, login: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, login, password_hash, created_at
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user. A duplicate login is not pre-checked: the unique
    /// constraint on `login` resolves concurrent duplicate registrations,
    /// surfacing here as a unique-violation database error.
    pub async fn create(db: &PgPool, login: &str, password_hash: &str) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (login, password_hash)
            VALUES ($1, $2)
            RETURNING id, login, password_hash, created_at
            "#,
        )
        .bind(login)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn password_hash_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            login: "alice".into(),
            password_hash: "$argon2id$secret".into(),
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("alice"));
        assert!(!json.contains("argon2id"));
    }

    // Database-backed tests, run with `cargo test -- --ignored` against a
    // reachable DATABASE_URL.

    #[sqlx::test]
    #[ignore = "requires a running Postgres"]
    async fn create_then_find_roundtrip(pool: PgPool) {
        let created = User::create(&pool, "alice", "$argon2id$hash").await.unwrap();
        let found = User::find_by_login(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.password_hash, "$argon2id$hash");
    }

    #[sqlx::test]
    #[ignore = "requires a running Postgres"]
    async fn login_is_case_sensitive(pool: PgPool) {
        User::create(&pool, "alice", "$argon2id$hash").await.unwrap();
        assert!(User::find_by_login(&pool, "Alice").await.unwrap().is_none());
    }

    #[sqlx::test]
    #[ignore = "requires a running Postgres"]
    async fn duplicate_signup_race_has_exactly_one_winner(pool: PgPool) {
        let (a, b) = tokio::join!(
            User::create(&pool, "alice", "$argon2id$hash-a"),
            User::create(&pool, "alice", "$argon2id$hash-b"),
        );
        let results = [a, b];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        let err = results.into_iter().find_map(Result::err).unwrap();
        // the loser surfaces as AlreadyExists, i.e. 422 at the boundary
        assert!(matches!(ApiError::from(err), ApiError::AlreadyExists(_)));
    }
}
