// Adapters layer: concrete implementations for the cart's external collaborators.

pub mod http;
pub mod notify;
pub mod storage;

pub use http::HttpCatalog;
pub use notify::{ConsoleNotifier, TracingNotifier};
pub use storage::{KeyValueCartRepository, LocalStorage, MemoryStorage, CART_STORAGE_KEY};
