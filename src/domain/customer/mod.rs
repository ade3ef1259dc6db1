//! Customer bounded context - the read-only customer directory

pub mod directory;
pub mod entity;

pub use directory::CustomerDirectory;
pub use entity::Customer;
