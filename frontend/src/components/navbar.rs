//! Top navigation bar: brand, route links, current user badge, sign-out.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::session::SessionHandle;

pub enum Msg {
    SessionChanged(SessionHandle),
    Logout,
    LoggedOut,
}

pub struct Navbar {
    session: SessionHandle,
    _listener: ContextHandle<SessionHandle>,
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, listener) = ctx
            .link()
            .context(ctx.link().callback(Msg::SessionChanged))
            .expect("Navbar must be rendered inside an AuthProvider");
        Self {
            session,
            _listener: listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(session) => {
                self.session = session;
                true
            }
            Msg::Logout => {
                self.session.logout(ctx.link().callback(|_| Msg::LoggedOut));
                false
            }
            Msg::LoggedOut => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if self.session.is_loading() {
            return html! {
                <nav class="navbar">
                    <Link<Route> classes="brand" to={Route::Home}>{"Test Case Manager"}</Link<Route>>
                    <div class="spinner" />
                </nav>
            };
        }

        html! {
            <nav class="navbar">
                <Link<Route> classes="brand" to={Route::Home}>{"Test Case Manager"}</Link<Route>>
                {
                    if let Some(user) = self.session.user() {
                        let initial = user
                            .username
                            .chars()
                            .next()
                            .unwrap_or('U')
                            .to_uppercase()
                            .to_string();
                        html! {
                            <div class="nav-user">
                                <span class="nav-avatar">{ initial }</span>
                                <span class="nav-username">{ &user.username }</span>
                                <button class="nav-logout" onclick={link.callback(|_| Msg::Logout)}>
                                    {"Sign out"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="nav-links">
                                <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
                                <Link<Route> to={Route::Signup}>{"Sign up"}</Link<Route>>
                            </div>
                        }
                    }
                }
            </nav>
        }
    }
}
