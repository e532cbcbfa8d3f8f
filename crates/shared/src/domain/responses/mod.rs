mod api;
mod order;
mod product;
mod user;

pub use self::api::MessageResponse;
pub use self::order::{OrderMessageResponse, OrderResponse};
pub use self::product::{ProductMessageResponse, ProductResponse};
pub use self::user::{LoginResponse, UserResponse};
