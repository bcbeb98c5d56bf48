use sqlx::PgPool;
use uuid::Uuid;

use business::domain::customer::model::Customer;
use business::domain::shared::value_objects::UserId;

pub async fn seed_user(pool: &PgPool) -> UserId {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"INSERT INTO users (id, username, email, first_name, last_name, password_hash)
            VALUES ($1, $2, $3, 'Test', 'Shopper', 'not-a-hash')"#,
    )
    .bind(id)
    .bind(format!("shopper-{}", id))
    .bind(format!("{}@example.com", id))
    .execute(pool)
    .await
    .unwrap();
    UserId::new(id)
}

pub async fn seed_customer(pool: &PgPool) -> Customer {
    let customer = Customer::for_user(seed_user(pool).await);
    sqlx::query("INSERT INTO customers (id, user_id) VALUES ($1, $2)")
        .bind(customer.id)
        .bind(customer.user_id.as_uuid())
        .execute(pool)
        .await
        .unwrap();
    customer
}

/// Inserts a product in a collection of its own.
pub async fn seed_product(pool: &PgPool, title: &str, unit_price: i64, inventory: i32) -> Uuid {
    let collection_id = Uuid::new_v4();
    sqlx::query("INSERT INTO collections (id, title) VALUES ($1, $2)")
        .bind(collection_id)
        .bind(format!("{} shelf", title))
        .execute(pool)
        .await
        .unwrap();

    let id = Uuid::new_v4();
    sqlx::query(
        r#"INSERT INTO products (id, title, slug, unit_price, inventory, collection_id)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
    )
    .bind(id)
    .bind(title)
    .bind(title.to_lowercase().replace(' ', "-"))
    .bind(unit_price)
    .bind(inventory)
    .bind(collection_id)
    .execute(pool)
    .await
    .unwrap();
    id
}

pub async fn count(pool: &PgPool, sql: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(sql)
        .fetch_one(pool)
        .await
        .unwrap()
}
