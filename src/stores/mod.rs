pub mod loading;
pub mod theme;

pub use loading::{LoadingGuard, LoadingTracker};
pub use theme::{DocumentRoot, FileStorage, LocalStorage, MemoryStorage, ThemeStore};
