mod compose;
mod encode;
mod error;
mod form;

pub use compose::*;
pub use encode::*;
pub use error::*;
pub use form::*;
