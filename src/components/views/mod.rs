mod auth_form;
mod details;
mod home;
mod login;
mod profile;
mod signup;
mod splash;

pub use details::Details;
pub use home::Home;
pub use login::Login;
pub use profile::Profile;
pub use signup::Signup;
pub use splash::Splash;
