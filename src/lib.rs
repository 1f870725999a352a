mod batch_function;
mod cache;
mod error;
mod load_request;
mod loader;
mod loader_worker;

pub mod loaders;
pub mod model;
pub mod resolver;
pub mod store;

pub use batch_function::BatchFunction;
pub use error::{BatchError, StoreError};
pub use loader::Loader;
pub use loaders::ResolutionContext;
pub use store::{MemoryStore, Store, StoreHandle};
