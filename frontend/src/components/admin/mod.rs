//! Generic admin page: root module wiring the Yew `Component`
//! implementation with submodules for state, messages, update logic, view
//! rendering, the mutation executor, and the per-resource schemas.
//!
//! Responsibilities
//! - Re-export the types pages need (`ResourceAdmin`, `ResourceSchema`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, issue the initial `load()` for the collection.

use yew::prelude::*;

mod helpers;
mod messages;
mod mutation;
pub mod resources;
pub mod schema;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use schema::ResourceSchema;
pub use state::ResourceAdmin;

impl<S: ResourceSchema> Component for ResourceAdmin<S> {
    type Message = Msg<S>;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ResourceAdmin::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::start_load(self, ctx);
        }
    }
}
