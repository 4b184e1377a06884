mod controller;
mod modal;
mod table;

pub use controller::*;
pub use modal::*;
pub use table::*;
