//! Error handling for the Bappy core.
//!
//! Every repository operation returns a tagged success/failure value rather
//! than panicking: [`RepositoryResult<T>`] with [`RepositoryError`] as the
//! failure side. State containers never propagate these failures upward;
//! they route them to the diagnostic channel and leave their cells
//! unchanged.

mod repository;

pub use repository::{RepositoryError, RepositoryResult};
