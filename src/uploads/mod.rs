//! Upload records and the state container the home screen owns.

mod list;
mod models;
mod params;
mod picker;

pub use list::*;
pub use models::*;
pub use params::*;
pub use picker::*;
