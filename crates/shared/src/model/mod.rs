mod order;
mod product;
mod subscriber;
mod user;

pub use self::order::{CartItem, FormData, Order, ORDER_STATUS_PENDING};
pub use self::product::Product;
pub use self::subscriber::Subscriber;
pub use self::user::User;
