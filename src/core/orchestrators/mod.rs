mod query_debouncer;
mod search_controller;
mod state_store;

pub use query_debouncer::QueryDebouncer;
pub use search_controller::SearchController;
pub use state_store::StateStore;
