//! Session store: the single source of truth for "who is logged in".
//!
//! `AuthProvider` owns the one [`Session`] instance for the application's
//! lifetime and republishes it through a context. All mutation goes through
//! the provider's message loop; consumers get a [`SessionHandle`] that pairs
//! the current snapshot with a dispatch callback, so the store stays
//! single-writer. The identity check against `/auth/me` runs exactly once
//! when the provider is created.

use std::rc::Rc;

use yew::prelude::*;

use common::model::user::User;

mod client;
mod state;

pub use state::Session;

/// Outcome of a login or signup attempt, handed back to the initiating page.
pub type AuthResult = Result<User, String>;

pub enum SessionMsg {
    /// A status check settled.
    StatusResolved(Option<User>),
    Login {
        email: String,
        password: String,
        on_done: Callback<AuthResult>,
    },
    Signup {
        email: String,
        username: String,
        password: String,
        on_done: Callback<AuthResult>,
    },
    /// A login or signup request settled.
    CredentialsSettled {
        result: AuthResult,
        on_done: Callback<AuthResult>,
    },
    Logout {
        on_done: Callback<()>,
    },
    LogoutSettled {
        on_done: Callback<()>,
    },
    /// Re-validate the session on demand.
    Refresh,
}

/// Context value distributed to the component tree: a session snapshot plus
/// the provider's dispatcher.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    session: Rc<Session>,
    dispatch: Callback<SessionMsg>,
}

impl SessionHandle {
    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Posts credentials; `on_done` receives the discriminated outcome. The
    /// server sets the session cookie as a side effect.
    pub fn login(&self, email: String, password: String, on_done: Callback<AuthResult>) {
        self.dispatch.emit(SessionMsg::Login {
            email,
            password,
            on_done,
        });
    }

    pub fn signup(
        &self,
        email: String,
        username: String,
        password: String,
        on_done: Callback<AuthResult>,
    ) {
        self.dispatch.emit(SessionMsg::Signup {
            email,
            username,
            password,
            on_done,
        });
    }

    /// Ends the session. The remote call is best-effort; local state clears
    /// unconditionally before `on_done` fires.
    pub fn logout(&self, on_done: Callback<()>) {
        self.dispatch.emit(SessionMsg::Logout { on_done });
    }

    pub fn refresh(&self) {
        self.dispatch.emit(SessionMsg::Refresh);
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

pub struct AuthProvider {
    session: Rc<Session>,
}

impl Component for AuthProvider {
    type Message = SessionMsg;
    type Properties = AuthProviderProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            SessionMsg::StatusResolved(client::fetch_current_user().await)
        });
        Self {
            session: Rc::new(Session::loading()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SessionMsg::StatusResolved(user) => {
                Rc::make_mut(&mut self.session).resolve(user);
                true
            }
            SessionMsg::Login {
                email,
                password,
                on_done,
            } => {
                ctx.link().send_future(async move {
                    SessionMsg::CredentialsSettled {
                        result: client::login(email, password).await,
                        on_done,
                    }
                });
                false
            }
            SessionMsg::Signup {
                email,
                username,
                password,
                on_done,
            } => {
                ctx.link().send_future(async move {
                    SessionMsg::CredentialsSettled {
                        result: client::signup(email, username, password).await,
                        on_done,
                    }
                });
                false
            }
            SessionMsg::CredentialsSettled { result, on_done } => {
                let changed = match &result {
                    Ok(user) => {
                        Rc::make_mut(&mut self.session).resolve(Some(user.clone()));
                        true
                    }
                    Err(_) => false,
                };
                on_done.emit(result);
                changed
            }
            SessionMsg::Logout { on_done } => {
                ctx.link().send_future(async move {
                    client::logout().await;
                    SessionMsg::LogoutSettled { on_done }
                });
                false
            }
            SessionMsg::LogoutSettled { on_done } => {
                Rc::make_mut(&mut self.session).clear();
                on_done.emit(());
                true
            }
            SessionMsg::Refresh => {
                Rc::make_mut(&mut self.session).begin_refresh();
                ctx.link().send_future(async {
                    SessionMsg::StatusResolved(client::fetch_current_user().await)
                });
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let handle = SessionHandle {
            session: self.session.clone(),
            dispatch: ctx.link().callback(|msg| msg),
        };
        html! {
            <ContextProvider<SessionHandle> context={handle}>
                { for ctx.props().children.iter() }
            </ContextProvider<SessionHandle>>
        }
    }
}
