mod auth;
mod hashing;
mod newsletter;
mod order;
mod product;
mod user;

pub use self::auth::{DynLoginService, DynRegisterService, LoginServiceTrait, RegisterServiceTrait};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::newsletter::{
    DynNewsletterService, DynSubscriberRepository, NewsletterServiceTrait,
    SubscriberRepositoryTrait,
};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, OrderCommandRepositoryTrait,
    OrderCommandServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, UserCommandRepositoryTrait,
    UserQueryRepositoryTrait,
};
