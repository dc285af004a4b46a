//! Host-provided hooks: confirmation prompts, navigation, dialog control.

/// Destinations the controllers can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AdminList,
    PublicList,
}

/// Synchronous yes/no prompt shown before destructive operations.
pub trait ConfirmationGate: Send {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: FnMut(&str) -> bool + Send,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub trait Navigator: Send {
    fn navigate(&mut self, route: Route);
}

impl<F> Navigator for F
where
    F: FnMut(Route) + Send,
{
    fn navigate(&mut self, route: Route) {
        self(route)
    }
}

/// Handle on the dialog hosting the submission form.
pub trait DialogHandle: Send {
    /// Close the confirmation dialog, whatever the submission outcome.
    fn dismiss_confirmation(&mut self);
}

impl<F> DialogHandle for F
where
    F: FnMut() + Send,
{
    fn dismiss_confirmation(&mut self) {
        self()
    }
}
