mod order;
mod product;
mod subscriber;
mod user;

pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::subscriber::SubscriberRepository;
pub use self::user::UserRepository;

use crate::config::ConnectionPool;

/// Every store-backed repository the services depend on.
#[derive(Clone)]
pub struct Repositories {
    pub user: UserRepository,
    pub product: ProductRepository,
    pub order: OrderRepository,
    pub subscriber: SubscriberRepository,
}

impl Repositories {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            product: ProductRepository::new(pool.clone()),
            order: OrderRepository::new(pool.clone()),
            subscriber: SubscriberRepository::new(pool),
        }
    }
}
