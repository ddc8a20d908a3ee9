pub mod compare;
pub mod handle;
pub mod refresh_task;
pub mod state;

// Re-export the session facade and its state types so the binary can wire
// everything up without reaching into submodules.
pub use compare::CompareList;
pub use handle::AppSession;
pub use state::{AppState, AuthState, CollectionCache};
