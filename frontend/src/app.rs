//! Admin shell: a tab per resource, each mounting the generic
//! `ResourceAdmin` component with that resource's schema. Switching tabs
//! unmounts the previous page, so every page re-fetches on entry and any
//! in-flight request of the old page is discarded with its scope.

use yew::{classes, html, Component, Context, Html};

use crate::components::admin::resources::{
    ActivitySchema, BlogSchema, CollaboratorSchema, LeadSchema, TransferSchema, TripSchema,
    TripTypeSchema,
};
use crate::components::admin::ResourceAdmin;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Trips,
    TripTypes,
    Activities,
    Blogs,
    Collaborators,
    Leads,
    Transfers,
}

impl Tab {
    const ALL: [Tab; 7] = [
        Tab::Trips,
        Tab::TripTypes,
        Tab::Activities,
        Tab::Blogs,
        Tab::Collaborators,
        Tab::Leads,
        Tab::Transfers,
    ];

    fn label(&self) -> &'static str {
        match self {
            Tab::Trips => "Trips",
            Tab::TripTypes => "Trip Types",
            Tab::Activities => "Activities",
            Tab::Blogs => "Blogs",
            Tab::Collaborators => "Collaborators",
            Tab::Leads => "Leads",
            Tab::Transfers => "Transfers",
        }
    }
}

pub enum Msg {
    Select(Tab),
}

pub struct App {
    active: Tab,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { active: Tab::Trips }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(tab) => {
                if self.active != tab {
                    self.active = tab;
                    return true;
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tabs = Tab::ALL
            .iter()
            .map(|tab| {
                let tab = *tab;
                html! {
                    <button
                        class={classes!("tab-btn", if self.active == tab { "active" } else { "" })}
                        onclick={link.callback(move |_| Msg::Select(tab))}
                    >
                        { tab.label() }
                    </button>
                }
            })
            .collect::<Html>();

        html! {
            <div class="admin-root">
                <header class="admin-header">
                    <h1>{ "Voyagedesk Admin" }</h1>
                </header>
                <nav class="tab-bar">{ tabs }</nav>
                <main class="admin-page">
                    {
                        match self.active {
                            Tab::Trips => html! { <ResourceAdmin<TripSchema> /> },
                            Tab::TripTypes => html! { <ResourceAdmin<TripTypeSchema> /> },
                            Tab::Activities => html! { <ResourceAdmin<ActivitySchema> /> },
                            Tab::Blogs => html! { <ResourceAdmin<BlogSchema> /> },
                            Tab::Collaborators => html! { <ResourceAdmin<CollaboratorSchema> /> },
                            Tab::Leads => html! { <ResourceAdmin<LeadSchema> /> },
                            Tab::Transfers => html! { <ResourceAdmin<TransferSchema> /> },
                        }
                    }
                </main>
            </div>
        }
    }
}
