//! Route guard for identity-requiring views.
//!
//! While the session is still resolving the guard renders a neutral waiting
//! state and performs no navigation; redirecting during that window would
//! bounce an as-yet-unresolved session. Once resolved, an unauthenticated
//! session triggers a one-time redirect to the sign-in route and renders
//! nothing; an authenticated one renders the wrapped content unchanged.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::session::SessionHandle;

/// What the guard does for a given session snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving: show the waiting state, do not navigate.
    Waiting,
    /// Resolved and unauthenticated: redirect, render nothing.
    Redirect,
    /// Resolved and authenticated: render the protected content.
    Render,
}

pub fn guard_outcome(is_loading: bool, is_authenticated: bool) -> GuardOutcome {
    if is_loading {
        GuardOutcome::Waiting
    } else if is_authenticated {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect
    }
}

pub enum Msg {
    SessionChanged(SessionHandle),
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    #[prop_or_default]
    pub children: Children,
}

pub struct ProtectedRoute {
    session: SessionHandle,
    _listener: ContextHandle<SessionHandle>,
    redirected: bool,
}

impl Component for ProtectedRoute {
    type Message = Msg;
    type Properties = ProtectedRouteProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (session, listener) = ctx
            .link()
            .context(ctx.link().callback(Msg::SessionChanged))
            .expect("ProtectedRoute must be rendered inside an AuthProvider");
        Self {
            session,
            _listener: listener,
            redirected: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(session) => {
                self.session = session;
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let outcome = guard_outcome(self.session.is_loading(), self.session.is_authenticated());
        if outcome == GuardOutcome::Redirect && !self.redirected {
            self.redirected = true;
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::Login);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match guard_outcome(self.session.is_loading(), self.session.is_authenticated()) {
            GuardOutcome::Waiting => html! {
                <div class="guard-waiting">
                    <div class="spinner" />
                </div>
            },
            GuardOutcome::Render => html! { <>{ for ctx.props().children.iter() }</> },
            GuardOutcome::Redirect => Html::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_while_loading_regardless_of_auth() {
        assert_eq!(guard_outcome(true, false), GuardOutcome::Waiting);
        assert_eq!(guard_outcome(true, true), GuardOutcome::Waiting);
    }

    #[test]
    fn renders_only_when_resolved_and_authenticated() {
        assert_eq!(guard_outcome(false, true), GuardOutcome::Render);
    }

    #[test]
    fn redirects_only_when_resolved_and_unauthenticated() {
        assert_eq!(guard_outcome(false, false), GuardOutcome::Redirect);
    }
}
