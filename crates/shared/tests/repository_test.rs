//! Repository tests against a live Postgres. Each test gets a fresh database
//! with the crate migrations applied; run them with `DATABASE_URL` set and
//! `cargo test -p shared -- --ignored`.

mod support;

use shared::{
    config::ConnectionPool,
    domain::{requests::CreateUserRequest, search::ProductSearch},
    errors::RepositoryError,
    repository::Repositories,
};
use support::{line, order, order_count, seed_product, stock_of};
use uuid::Uuid;

// -----------------------------------------------------------------------
// Orders
// -----------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn order_decrements_every_line(pool: ConnectionPool) {
    let repos = Repositories::new(pool.clone());
    let shirt = seed_product(&repos, "Shirt", "Clothing", &[], 20.0, 5).await;
    let cap = seed_product(&repos, "Cap", "Accessories", &[], 8.0, 3).await;

    let placed = repos
        .order
        .command
        .place_order(&order(vec![line(&shirt, 2), line(&cap, 1), line(&shirt, 1)]))
        .await
        .unwrap();

    assert_eq!(placed.order_status, "Pending");
    assert_eq!(placed.cart_items.0.len(), 3);
    assert_eq!(stock_of(&pool, shirt.product_id).await, 2);
    assert_eq!(stock_of(&pool, cap.product_id).await, 2);
    assert_eq!(order_count(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn rejected_order_rolls_back_earlier_lines(pool: ConnectionPool) {
    let repos = Repositories::new(pool.clone());
    let a = seed_product(&repos, "Alpha", "Clothing", &[], 10.0, 5).await;
    let b = seed_product(&repos, "Beta", "Clothing", &[], 10.0, 1).await;

    let err = repos
        .order
        .command
        .place_order(&order(vec![line(&a, 2), line(&b, 2)]))
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::StockShortage { product } if product == "Beta"));
    assert_eq!(stock_of(&pool, a.product_id).await, 5);
    assert_eq!(stock_of(&pool, b.product_id).await, 1);
    assert_eq!(order_count(&pool).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn unknown_product_line_names_unknown_product(pool: ConnectionPool) {
    let repos = Repositories::new(pool.clone());
    let a = seed_product(&repos, "Alpha", "Clothing", &[], 10.0, 5).await;
    let mut ghost = line(&a, 1);
    ghost.id = Uuid::new_v4().to_string();

    let err = repos
        .order
        .command
        .place_order(&order(vec![line(&a, 1), ghost]))
        .await
        .unwrap_err();

    assert!(
        matches!(err, RepositoryError::StockShortage { product } if product == "Unknown Product")
    );
    assert_eq!(stock_of(&pool, a.product_id).await, 5);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn concurrent_orders_in_opposite_line_order_all_succeed(pool: ConnectionPool) {
    let repos = Repositories::new(pool.clone());
    let p = seed_product(&repos, "P", "Clothing", &[], 10.0, 1_000).await;
    let q = seed_product(&repos, "Q", "Clothing", &[], 10.0, 1_000).await;

    let handles: Vec<_> = (0..40)
        .map(|i| {
            let repos = repos.clone();
            let cart = if i % 2 == 0 {
                vec![line(&p, 1), line(&q, 1)]
            } else {
                vec![line(&q, 1), line(&p, 1)]
            };
            tokio::spawn(async move { repos.order.command.place_order(&order(cart)).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(stock_of(&pool, p.product_id).await, 960);
    assert_eq!(stock_of(&pool, q.product_id).await, 960);
    assert_eq!(order_count(&pool).await, 40);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn concurrent_orders_never_oversell(pool: ConnectionPool) {
    let repos = Repositories::new(pool.clone());
    let last = seed_product(&repos, "Last One", "Clothing", &[], 10.0, 1).await;

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let repos = repos.clone();
            let cart = vec![line(&last, 1)];
            tokio::spawn(async move { repos.order.command.place_order(&order(cart)).await })
        })
        .collect();

    let mut placed = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => placed += 1,
            Err(err) => assert!(matches!(err, RepositoryError::StockShortage { .. })),
        }
    }

    assert_eq!(placed, 1);
    assert_eq!(stock_of(&pool, last.product_id).await, 0);
}

// -----------------------------------------------------------------------
// Products
// -----------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn search_matches_category_price_and_sizes(pool: ConnectionPool) {
    let repos = Repositories::new(pool);
    seed_product(&repos, "Linen Shirt", "Clothing", &["S", "XL"], 49.5, 3).await;
    seed_product(&repos, "Leather Boot", "Footwear", &["42"], 1299.0, 2).await;

    let names = |query: &str| {
        let repos = repos.clone();
        let search = ProductSearch::parse(Some(query));
        async move {
            repos
                .product
                .query
                .find_all(search.as_ref())
                .await
                .unwrap()
                .into_iter()
                .map(|p| p.name)
                .collect::<Vec<_>>()
        }
    };

    assert_eq!(names("footWEAR").await, ["Leather Boot"]);
    assert_eq!(names("1299").await, ["Leather Boot"]);
    assert_eq!(names("49.5").await, ["Linen Shirt"]);
    assert_eq!(names("xl").await, ["Linen Shirt"]);
    assert!(names("sandal").await.is_empty());
    assert!(names("%").await.is_empty());
    assert_eq!(names("").await, ["Linen Shirt", "Leather Boot"]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deleted_product_leaves_the_listing(pool: ConnectionPool) {
    let repos = Repositories::new(pool);
    let keep = seed_product(&repos, "Keep", "Clothing", &[], 10.0, 1).await;
    let drop = seed_product(&repos, "Drop", "Clothing", &[], 10.0, 1).await;

    let removed = repos
        .product
        .command
        .delete_product(drop.product_id)
        .await
        .unwrap();
    assert_eq!(removed.map(|p| p.product_id), Some(drop.product_id));

    let again = repos
        .product
        .command
        .delete_product(drop.product_id)
        .await
        .unwrap();
    assert!(again.is_none());

    let listed = repos.product.query.find_all(None).await.unwrap();
    assert_eq!(
        listed.iter().map(|p| p.product_id).collect::<Vec<_>>(),
        [keep.product_id]
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_stock_on_missing_product_is_none(pool: ConnectionPool) {
    let repos = Repositories::new(pool);
    let tee = seed_product(&repos, "Tee", "Clothing", &[], 10.0, 1).await;

    let updated = repos
        .product
        .command
        .update_stock(tee.product_id, 25)
        .await
        .unwrap();
    assert_eq!(updated.map(|p| p.stock), Some(25));

    let missing = repos
        .product
        .command
        .update_stock(Uuid::new_v4(), 25)
        .await
        .unwrap();
    assert!(missing.is_none());
}

// -----------------------------------------------------------------------
// Users and subscribers
// -----------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_user_email_is_already_exists(pool: ConnectionPool) {
    let repos = Repositories::new(pool);
    let req = CreateUserRequest {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: "hash".into(),
    };

    let created = repos.user.command.create_user(&req).await.unwrap();
    let found = repos
        .user
        .query
        .find_by_email("ada@example.com")
        .await
        .unwrap();
    assert_eq!(found.map(|u| u.user_id), Some(created.user_id));

    let err = repos.user.command.create_user(&req).await.unwrap_err();
    assert!(matches!(err, RepositoryError::AlreadyExists(msg) if msg == "Email already exists"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_subscriber_is_already_exists(pool: ConnectionPool) {
    let repos = Repositories::new(pool);

    repos.subscriber.store.create("news@example.com").await.unwrap();
    assert!(
        repos
            .subscriber
            .store
            .find_by_email("news@example.com")
            .await
            .unwrap()
            .is_some()
    );

    let err = repos
        .subscriber
        .store
        .create("news@example.com")
        .await
        .unwrap_err();
    assert!(
        matches!(err, RepositoryError::AlreadyExists(msg) if msg == "Email already subscribed")
    );
}
