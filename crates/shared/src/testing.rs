//! In-memory repositories for exercising services and handlers without Postgres.

use crate::{
    abstract_trait::{
        DynHashing, DynOrderCommandRepository, DynProductCommandRepository,
        DynProductQueryRepository, DynSubscriberRepository, DynUserCommandRepository,
        DynUserQueryRepository, OrderCommandRepositoryTrait, ProductCommandRepositoryTrait,
        ProductQueryRepositoryTrait, SubscriberRepositoryTrait, UserCommandRepositoryTrait,
        UserQueryRepositoryTrait,
    },
    config::Hashing,
    di::{DependenciesInject, DependenciesInjectDeps},
    domain::{
        requests::{CreateOrderRequest, CreateProductRequest, CreateUserRequest},
        search::ProductSearch,
    },
    errors::RepositoryError,
    model::{CartItem, ORDER_STATUS_PENDING, Order, Product, Subscriber, User},
    repository::{
        OrderRepository, ProductRepository, Repositories, SubscriberRepository, UserRepository,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use prometheus_client::registry::Registry;
use sqlx::types::Json;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Lowest cost bcrypt accepts, keeps hashing fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    products: Mutex<Vec<Product>>,
    orders: Mutex<Vec<Order>>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            user: UserRepository {
                query: self.clone() as DynUserQueryRepository,
                command: self.clone() as DynUserCommandRepository,
            },
            product: ProductRepository {
                query: self.clone() as DynProductQueryRepository,
                command: self.clone() as DynProductCommandRepository,
            },
            order: OrderRepository {
                command: self.clone() as DynOrderCommandRepository,
            },
            subscriber: SubscriberRepository {
                store: self.clone() as DynSubscriberRepository,
            },
        }
    }

    /// Full service container over this store, with its own metrics registry.
    pub async fn container(self: &Arc<Self>) -> DependenciesInject {
        DependenciesInject::new(DependenciesInjectDeps {
            repositories: self.repositories(),
            hash: Arc::new(Hashing::new(TEST_BCRYPT_COST)) as DynHashing,
            registry: Arc::new(Mutex::new(Registry::default())),
        })
        .await
    }

    pub async fn seed_product(&self, name: &str, category: &str, stock: i32) -> Product {
        let now = Utc::now();
        let product = Product {
            product_id: Uuid::new_v4(),
            name: name.to_string(),
            gender: "Unisex".to_string(),
            category: category.to_string(),
            sub_category: None,
            sub_sub_category: None,
            description: None,
            color: None,
            sizes: Vec::new(),
            price: 10.0,
            stock,
            image: None,
            created_at: now,
            updated_at: now,
        };

        self.products.lock().await.push(product.clone());
        product
    }

    pub async fn stock_of(&self, id: Uuid) -> Option<i32> {
        self.products
            .lock()
            .await
            .iter()
            .find(|p| p.product_id == id)
            .map(|p| p.stock)
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }

    pub async fn users(&self) -> Vec<User> {
        self.users.lock().await.clone()
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for InMemoryStore {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().await;

        if users.iter().any(|u| u.email == req.email) {
            return Err(RepositoryError::AlreadyExists(
                "Email already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let user = User {
            user_id: Uuid::new_v4(),
            name: req.name.clone(),
            email: req.email.clone(),
            password: req.password.clone(),
            created_at: now,
            updated_at: now,
        };

        users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryStore {
    async fn find_all(
        &self,
        search: Option<&ProductSearch>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.lock().await;

        Ok(products
            .iter()
            .filter(|p| search.is_none_or(|s| s.matches(p)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryStore {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let now = Utc::now();
        let product = Product {
            product_id: Uuid::new_v4(),
            name: req.name.clone(),
            gender: req.gender.clone(),
            category: req.category.clone(),
            sub_category: req.sub_category.clone(),
            sub_sub_category: req.sub_sub_category.clone(),
            description: req.description.clone(),
            color: req.color.clone(),
            sizes: req.sizes.clone(),
            price: req.price.unwrap_or_default(),
            stock: req.stock,
            image: req.image.clone(),
            created_at: now,
            updated_at: now,
        };

        self.products.lock().await.push(product.clone());
        Ok(product)
    }

    async fn update_stock(&self, id: Uuid, stock: i32) -> Result<Option<Product>, RepositoryError> {
        let mut products = self.products.lock().await;

        Ok(products.iter_mut().find(|p| p.product_id == id).map(|p| {
            p.stock = stock;
            p.updated_at = Utc::now();
            p.clone()
        }))
    }

    async fn delete_product(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let mut products = self.products.lock().await;

        Ok(products
            .iter()
            .position(|p| p.product_id == id)
            .map(|index| products.remove(index)))
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for InMemoryStore {
    async fn place_order(&self, req: &CreateOrderRequest) -> Result<Order, RepositoryError> {
        let mut products = self.products.lock().await;
        let cart_items: Vec<CartItem> = req.cart_items.iter().cloned().map(Into::into).collect();

        // Work on a copy so a failing line leaves the store untouched.
        let mut staged = products.clone();

        for item in &cart_items {
            let product = Uuid::parse_str(&item.id)
                .ok()
                .and_then(|id| staged.iter_mut().find(|p| p.product_id == id));

            match product {
                Some(product) if product.stock >= item.quantity => {
                    product.stock -= item.quantity;
                }
                Some(product) => {
                    return Err(RepositoryError::StockShortage {
                        product: product.name.clone(),
                    });
                }
                None => {
                    return Err(RepositoryError::StockShortage {
                        product: "Unknown Product".to_string(),
                    });
                }
            }
        }

        let now = Utc::now();
        let order = Order {
            order_id: Uuid::new_v4(),
            form_data: Json(req.form_data.clone()),
            cart_items: Json(cart_items),
            total_price: req.total_price,
            shipping_cost: req.shipping_cost,
            tax: req.tax,
            discount: req.discount,
            order_status: ORDER_STATUS_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        };

        *products = staged;
        self.orders.lock().await.push(order.clone());

        Ok(order)
    }
}

#[async_trait]
impl SubscriberRepositoryTrait for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, RepositoryError> {
        let subscribers = self.subscribers.lock().await;
        Ok(subscribers.iter().find(|s| s.email == email).cloned())
    }

    async fn create(&self, email: &str) -> Result<Subscriber, RepositoryError> {
        let mut subscribers = self.subscribers.lock().await;

        if subscribers.iter().any(|s| s.email == email) {
            return Err(RepositoryError::AlreadyExists(
                "Email already subscribed".to_string(),
            ));
        }

        let subscriber = Subscriber {
            subscriber_id: Uuid::new_v4(),
            email: email.to_string(),
            created_at: Utc::now(),
        };

        subscribers.push(subscriber.clone());
        Ok(subscriber)
    }
}
