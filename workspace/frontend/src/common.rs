pub mod error;
pub mod loading;
pub mod snapshot_view;
