pub mod body;
pub mod format;
pub mod response;

pub use body::JsonBody;
pub use format::{article_view, user_view, ArticleView, UserView};
pub use response::ApiResponse;
