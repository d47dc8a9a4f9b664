pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod page;
pub mod render;
pub mod requester;
pub mod util;

pub use config::Config;
pub use page::Page;
pub use requester::{HttpTransport, Requester, Transport};
