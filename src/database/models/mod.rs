pub mod article;
pub mod user;

pub use article::{Article, ArticleChanges, NewArticle};
pub use user::{NewUser, User};
