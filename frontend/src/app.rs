//! Application composition root: session provider, router, and route table.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::route_guard::ProtectedRoute;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::signup::SignupPage;
use crate::session::AuthProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <ProtectedRoute>
                <HomePage />
            </ProtectedRoute>
        },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <AuthProvider>
                <BrowserRouter>
                    <Navbar />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </AuthProvider>
        }
    }
}
