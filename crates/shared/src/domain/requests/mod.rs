mod auth;
mod newsletter;
mod order;
mod product;

pub use self::auth::{CreateUserRequest, LoginRequest, RegisterRequest};
pub use self::newsletter::SubscribeRequest;
pub use self::order::{CartItemRequest, CreateOrderRequest};
pub use self::product::{CreateProductRequest, FindAllProducts, UpdateStockRequest};
