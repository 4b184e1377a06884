//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod icons;
mod navigation;
mod player;
mod theme;
mod themed;
mod upload_list;
mod views;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use navigation::*;
pub use player::*;
pub use theme::*;
pub use themed::*;
pub use upload_list::*;
// Views are routed through `Route`; reach them via views::ViewName
