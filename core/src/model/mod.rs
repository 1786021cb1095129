mod error;
mod id_types;
mod photo;
mod season;
mod time_event;
pub use error::*;
pub use id_types::*;
pub use photo::*;
pub use season::*;
pub use time_event::*;
