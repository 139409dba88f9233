use sqlx::PgPool;

/// A fresh connection answers both probe queries.
#[sqlx::test(migrations = false)]
async fn health_check_and_version(pool: PgPool) {
    bluecart_db::health_check(&pool).await.unwrap();

    let version = bluecart_db::server_version(&pool).await.unwrap();
    assert!(
        version.starts_with("PostgreSQL"),
        "unexpected version banner: {version}"
    );
}
