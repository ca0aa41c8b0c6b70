pub mod route;
pub mod views;

pub use route::{Route, RouteMeta, Router};
pub use views::{View, ViewFactory};
