pub mod photo;
pub mod timeline;
pub use photo::*;
pub use timeline::*;
