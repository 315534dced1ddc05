pub mod config;
pub mod error;
pub mod pagination;
pub mod query;
pub mod render;
pub mod web;

pub use config::{Config, PaginationConfig};
pub use error::Error;
pub use pagination::{LimitOption, PageLink, PaginationResult, paginate, paginate_with};
pub use query::{ArrayStyle, QueryParams, QueryValue};
