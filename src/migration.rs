//! Schema setup for the three tables. Idempotent; safe to run on every start.
//!
//! Foreign keys follow `fk_<table>_<column>_<referenced_table>`. `ON DELETE CASCADE`
//! backs up the explicit cascade in [`crate::store::PgStore`].

use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        address TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pizzas (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        ingredients TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS restaurant_pizzas (
        id BIGSERIAL PRIMARY KEY,
        price INTEGER NOT NULL,
        restaurant_id BIGINT NOT NULL,
        pizza_id BIGINT NOT NULL,
        CONSTRAINT price_between_1_and_30 CHECK (price >= 1 AND price <= 30),
        CONSTRAINT fk_restaurant_pizzas_restaurant_id_restaurants
            FOREIGN KEY (restaurant_id) REFERENCES restaurants (id) ON DELETE CASCADE,
        CONSTRAINT fk_restaurant_pizzas_pizza_id_pizzas
            FOREIGN KEY (pizza_id) REFERENCES pizzas (id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_restaurant_pizzas_restaurant_id ON restaurant_pizzas (restaurant_id)",
];

pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for stmt in DDL {
        sqlx::query(stmt).execute(pool).await?;
    }
    tracing::info!("schema ready");
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    let (admin_url, db_name) = split_database_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let mut conn = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?
        .connect()
        .await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}

/// Returns (url pointing at the `postgres` database, target database name).
fn split_database_url(url: &str) -> Result<(String, String), sqlx::Error> {
    let (before_query, query) = match url.split_once('?') {
        Some((head, q)) => (head, format!("?{}", q)),
        None => (url, String::new()),
    };
    let authority_start = before_query
        .find("://")
        .map(|i| i + 3)
        .ok_or_else(|| sqlx::Error::Configuration("DATABASE_URL: missing scheme".into()))?;
    let (base, db_name) = match before_query[authority_start..].find('/') {
        Some(i) => before_query.split_at(authority_start + i + 1),
        None => return Ok((format!("{}/postgres{}", before_query, query), String::new())),
    };
    Ok((format!("{}postgres{}", base, query), db_name.trim().to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name_from_url() {
        let (admin, name) = split_database_url("postgres://u:p@localhost:5432/pizzas").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "pizzas");

        let (admin, name) = split_database_url("postgres://localhost/pizzas?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(name, "pizzas");
    }

    #[test]
    fn slashes_in_query_do_not_move_the_database_name() {
        let (admin, name) = split_database_url("postgres://u@h/pizzas?sslrootcert=/etc/ca.pem").unwrap();
        assert_eq!(admin, "postgres://u@h/postgres?sslrootcert=/etc/ca.pem");
        assert_eq!(name, "pizzas");

        let (admin, name) = split_database_url("postgres://u@h?sslrootcert=/etc/ca.pem").unwrap();
        assert_eq!(admin, "postgres://u@h/postgres?sslrootcert=/etc/ca.pem");
        assert_eq!(name, "");

        assert!(split_database_url("localhost/pizzas").is_err());
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("pi\"zza"), "\"pi\"\"zza\"");
    }

    #[test]
    fn association_table_carries_named_constraints() {
        let ddl = DDL[2];
        assert!(ddl.contains("fk_restaurant_pizzas_restaurant_id_restaurants"));
        assert!(ddl.contains("fk_restaurant_pizzas_pizza_id_pizzas"));
        assert!(ddl.contains("price_between_1_and_30"));
    }
}
