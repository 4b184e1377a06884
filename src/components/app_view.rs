//! Defines the route table shared by every screen.

use crate::components::views::{Details, Home, Login, Profile, Signup, Splash};
use crate::components::AppShell;
use crate::uploads::QueryText;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Splash {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/home")]
        Home {},
        #[route("/details/:id?:file_name&:uploaded_at&:status")]
        Details {
            id: String,
            file_name: QueryText,
            uploaded_at: QueryText,
            status: QueryText,
        },
        #[route("/profile")]
        Profile {},
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Splash {} => "Audiobook",
            Route::Login {} => "Login",
            Route::Signup {} => "Sign up",
            Route::Home {} => "Uploads",
            Route::Details { .. } => "Details",
            Route::Profile {} => "Profile",
        }
    }
}
