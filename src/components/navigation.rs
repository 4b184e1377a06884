use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::components::app_view::Route;
use crate::uploads::DetailsParams;

/// User-visible transitions between screens.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowAction {
    SplashElapsed,
    LoggedIn,
    SignedUp,
    OpenSignup,
    OpenLogin,
    OpenProfile,
    OpenDetails(DetailsParams),
    Logout,
    Back,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavCommand {
    Push(Route),
    Replace(Route),
    Back,
}

/// Login and signup carry no credential check; both land on home.
pub fn command_for(action: FlowAction) -> NavCommand {
    match action {
        FlowAction::SplashElapsed | FlowAction::Logout => NavCommand::Replace(Route::Login {}),
        FlowAction::LoggedIn | FlowAction::SignedUp => NavCommand::Replace(Route::Home {}),
        FlowAction::OpenSignup => NavCommand::Push(Route::Signup {}),
        FlowAction::OpenLogin => NavCommand::Push(Route::Login {}),
        FlowAction::OpenProfile => NavCommand::Push(Route::Profile {}),
        FlowAction::OpenDetails(params) => NavCommand::Push(params.into_route()),
        FlowAction::Back => NavCommand::Back,
    }
}

#[derive(Clone)]
pub struct Navigation {
    navigator: Navigator,
}

impl Navigation {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }

    pub fn dispatch(&self, action: FlowAction) {
        let command = command_for(action);
        log::debug!("navigation: {command:?}");
        match command {
            NavCommand::Push(route) => {
                let _ = self.navigator.push(route);
            }
            NavCommand::Replace(route) => {
                let _ = self.navigator.replace(route);
            }
            NavCommand::Back => {
                // Deep links have no history to pop.
                if self.navigator.can_go_back() {
                    self.navigator.go_back();
                } else {
                    let _ = self.navigator.replace(Route::Home {});
                }
            }
        }
    }
}

pub fn use_navigation() -> Navigation {
    Navigation::new(use_navigator())
}
