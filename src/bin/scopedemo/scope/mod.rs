mod errors;
mod label;
mod package;

pub use errors::*;
pub use label::*;
pub use package::*;
