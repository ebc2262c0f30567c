pub mod api;
pub mod notifier;
