//! Home page: the main workspace wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export the page type and its message enum.
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, check the spreadsheet connection once and populate the
//!   workflow state from the result.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::HomePage;

impl Component for HomePage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, listener) = ctx
            .link()
            .context(ctx.link().callback(Msg::SessionChanged))
            .expect("HomePage must be rendered inside an AuthProvider");
        HomePage::new(session, listener)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !self.checked {
            self.checked = true;
            update::check_connection(ctx.link());
        }
    }
}
