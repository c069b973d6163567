pub mod app;
pub mod components;
pub mod context;
pub mod hooks;
pub mod routes;
pub mod store;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use store::{AppStore, StoreError, try_app_store, use_app_store};
