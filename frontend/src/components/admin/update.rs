//! Update function for the generic admin page, Elm-style: takes the state
//! and a message, mutates, returns whether to re-render. Async work is
//! spawned here and reports back through further messages.
//!
//! The page follows a fixed machine:
//! list -> form (Add/Edit), form -> list (Cancel, or submit success after a
//! reload), submit failure keeps the form with the draft intact, delete
//! success drops the record locally, delete failure changes nothing.

use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{alert, confirm, show_toast};
use super::messages::Msg;
use super::mutation::{self, Method, MutationOutcome};
use super::schema::ResourceSchema;
use super::state::{payload_of, FormState, Mode, ResourceAdmin};

pub fn update<S: ResourceSchema>(
    component: &mut ResourceAdmin<S>,
    ctx: &Context<ResourceAdmin<S>>,
    msg: Msg<S>,
) -> bool {
    match msg {
        Msg::Loaded { epoch, records } => {
            // A newer load() superseded this response; drop it.
            if epoch != component.load_epoch {
                return false;
            }
            component.loading = false;
            component.records = records;
            true
        }
        Msg::LoadFailed { epoch, reason } => {
            if epoch != component.load_epoch {
                return false;
            }
            // Prior state stays untouched; no retry.
            component.loading = false;
            gloo_console::error!("failed to load", S::PLURAL, ":", reason);
            true
        }
        Msg::SearchChanged(term) => {
            component.search = term;
            true
        }
        Msg::StartCreate => {
            component.mode = Mode::Form(FormState::create());
            true
        }
        Msg::StartEdit(id) => {
            if let Some(record) = component.find_by_id(&id) {
                component.mode = Mode::Form(FormState::edit(record));
                return true;
            }
            false
        }
        Msg::FieldInput(index, raw) => {
            if let Mode::Form(form) = &mut component.mode {
                if !form.submitting {
                    form.apply_input(index, &raw);
                    return true;
                }
            }
            false
        }
        Msg::TogglePreview(preview) => {
            if let Mode::Form(form) = &mut component.mode {
                form.preview = preview;
                return true;
            }
            false
        }
        Msg::Cancel => {
            component.mode = Mode::List;
            true
        }
        Msg::Submit => {
            let Mode::Form(form) = &mut component.mode else {
                return false;
            };
            // Re-entrant submit (double-click) while in flight: no-op.
            if !form.begin_submit() {
                return false;
            }
            if let Some(reason) = form.first_blocker() {
                alert(&reason);
                form.submitting = false;
                return true;
            }
            let body = payload_of(&form.draft);
            let (method, url) = match &form.editing_id {
                Some(id) => (Method::Put, format!("{}/{}", S::BASE_PATH, id)),
                None => (Method::Post, S::BASE_PATH.to_string()),
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = mutation::execute(method, &url, Some(&body)).await;
                link.send_message(Msg::SubmitFinished(outcome));
            });
            true
        }
        Msg::SubmitFinished(outcome) => {
            let Mode::Form(form) = &mut component.mode else {
                // Form was cancelled while the request was in flight.
                return false;
            };
            if !form.submitting {
                return false;
            }
            match outcome {
                MutationOutcome::Success => {
                    show_toast(&format!("{} saved.", S::SINGULAR));
                    component.mode = Mode::List;
                    start_load(component, ctx);
                }
                MutationOutcome::Failure(message) => {
                    // Draft stays as typed so the user can fix and retry.
                    alert(&message);
                    form.submitting = false;
                }
            }
            true
        }
        Msg::Delete(id) => {
            if !confirm(&format!("Delete this {}?", S::SINGULAR.to_lowercase())) {
                return false;
            }
            let url = format!("{}/{}", S::BASE_PATH, id);
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = mutation::execute(Method::Delete, &url, None).await;
                link.send_message(Msg::DeleteFinished { id, outcome });
            });
            false
        }
        Msg::DeleteFinished { id, outcome } => match outcome {
            MutationOutcome::Success => {
                component.remove_local(&id);
                show_toast(&format!("{} deleted.", S::SINGULAR));
                true
            }
            MutationOutcome::Failure(message) => {
                // List stays unchanged on a failed delete.
                alert(&message);
                false
            }
        },
    }
}

/// Issues a fresh `load()`: bumps the epoch so any response still in flight
/// from an earlier load is discarded when it arrives.
pub fn start_load<S: ResourceSchema>(
    component: &mut ResourceAdmin<S>,
    ctx: &Context<ResourceAdmin<S>>,
) {
    component.load_epoch += 1;
    component.loading = true;
    let epoch = component.load_epoch;
    let link = ctx.link().clone();
    spawn_local(async move {
        match mutation::load_collection::<S>().await {
            Ok(records) => link.send_message(Msg::Loaded { epoch, records }),
            Err(reason) => link.send_message(Msg::LoadFailed { epoch, reason }),
        }
    });
}
