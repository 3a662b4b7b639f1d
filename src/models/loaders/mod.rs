pub mod pool_loader;

pub use pool_loader::{load_pool, load_pool_file};
