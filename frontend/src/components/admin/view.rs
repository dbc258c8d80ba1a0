//! View rendering for the generic admin page.
//!
//! List mode: toolbar (Add + search box) above a table whose columns come
//! from the schema's `in_list` fields, plus an actions column. Form mode:
//! one input per field descriptor, a markdown preview tab for fields that
//! want one, and Save/Cancel controls that lock while a submit is in
//! flight.

use pulldown_cmark::{html as md_html, Parser};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::format_price;
use super::messages::Msg;
use super::schema::{FieldDef, FieldKind, ResourceSchema};
use super::state::{FormState, Mode, ResourceAdmin};

pub fn view<S: ResourceSchema>(
    component: &ResourceAdmin<S>,
    ctx: &Context<ResourceAdmin<S>>,
) -> Html {
    let link = ctx.link();
    match &component.mode {
        Mode::List => build_list(component, link),
        Mode::Form(form) => build_form(form, link),
    }
}

fn build_list<S: ResourceSchema>(component: &ResourceAdmin<S>, link: &Scope<ResourceAdmin<S>>) -> Html {
    let fields = S::fields();
    let columns: Vec<&FieldDef<S::Record>> = fields.iter().filter(|f| f.in_list).collect();

    let header_cells = columns
        .iter()
        .map(|field| html! { <th>{ field.label }</th> })
        .collect::<Html>();

    let filtered = component.filtered();
    let rows = filtered
        .iter()
        .map(|record| build_row::<S>(*record, &columns, link))
        .collect::<Html>();

    html! {
        <div class="resource-list">
            <div class="list-toolbar">
                <h2>{ S::PLURAL }</h2>
                <input
                    type="search"
                    class="search-input"
                    placeholder={format!("Search {}...", S::PLURAL.to_lowercase())}
                    value={component.search.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlInputElement>().value();
                        Msg::SearchChanged(value)
                    })}
                />
                <button class="primary" onclick={link.callback(|_| Msg::StartCreate)}>
                    { format!("Add {}", S::SINGULAR) }
                </button>
            </div>
            {
                if component.loading && component.records.is_empty() {
                    html! { <p class="list-empty">{ "Loading..." }</p> }
                } else if filtered.is_empty() {
                    html! { <p class="list-empty">{ format!("No {} found.", S::PLURAL.to_lowercase()) }</p> }
                } else {
                    html! {
                        <table class="resource-table">
                            <thead>
                                <tr>{ header_cells }<th>{ "Actions" }</th></tr>
                            </thead>
                            <tbody>{ rows }</tbody>
                        </table>
                    }
                }
            }
        </div>
    }
}

fn build_row<S: ResourceSchema>(
    record: &S::Record,
    columns: &[&FieldDef<S::Record>],
    link: &Scope<ResourceAdmin<S>>,
) -> Html {
    let cells = columns
        .iter()
        .map(|field| html! { <td>{ cell_text(record, field) }</td> })
        .collect::<Html>();

    // Records come from the store, so an id is always present; guard anyway
    // rather than panic on a malformed document.
    let actions = match S::record_id(record) {
        Some(id) => {
            let edit_id = id.to_string();
            let delete_id = id.to_string();
            html! {
                <>
                    <button onclick={link.callback(move |_| Msg::StartEdit(edit_id.clone()))}>
                        { "Edit" }
                    </button>
                    <button class="danger" onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>
                        { "Delete" }
                    </button>
                </>
            }
        }
        None => html! {},
    };

    html! {
        <tr>
            { cells }
            <td class="row-actions">{ actions }</td>
        </tr>
    }
}

/// Table cell text for a column. Numeric values get thousands separators
/// here; the raw value stays unformatted so form inputs can re-parse it.
fn cell_text<R>(record: &R, field: &FieldDef<R>) -> String {
    let raw = (field.get)(record);
    match field.kind {
        FieldKind::Number => raw.parse::<f64>().map(format_price).unwrap_or(raw),
        _ => raw,
    }
}

fn build_form<S: ResourceSchema>(form: &FormState<S>, link: &Scope<ResourceAdmin<S>>) -> Html {
    let title = match &form.editing_id {
        Some(_) => format!("Edit {}", S::SINGULAR),
        None => format!("New {}", S::SINGULAR),
    };

    let inputs = S::fields()
        .iter()
        .enumerate()
        .map(|(index, field)| build_field(form, index, field, link))
        .collect::<Html>();

    html! {
        <div class="resource-form">
            <div class="form-header">
                <h2>{ title }</h2>
                {
                    if form.is_dirty() {
                        html! { <span class="dirty-dot" title="Unsaved changes" /> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <form onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                { inputs }
                <div class="form-actions">
                    <button type="submit" class="primary" disabled={form.submitting}>
                        { if form.submitting { "Saving..." } else { "Save" } }
                    </button>
                    <button
                        type="button"
                        onclick={link.callback(|_| Msg::Cancel)}
                        disabled={form.submitting}
                    >
                        { "Cancel" }
                    </button>
                </div>
            </form>
        </div>
    }
}

fn build_field<S: ResourceSchema>(
    form: &FormState<S>,
    index: usize,
    field: &FieldDef<S::Record>,
    link: &Scope<ResourceAdmin<S>>,
) -> Html {
    let value = form.display_value(index);
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let control = match &field.kind {
        FieldKind::Text => html! {
            <input
                type="text"
                value={value}
                oninput={text_input_callback(link, index)}
            />
        },
        FieldKind::LongText => html! {
            <textarea
                rows="4"
                value={value}
                oninput={textarea_callback(link, index)}
            />
        },
        FieldKind::Markdown => build_markdown_field(form, index, &value, link),
        FieldKind::Number => {
            let error = form.number_errors.get(&index).cloned();
            html! {
                <>
                    <input
                        type="text"
                        inputmode="decimal"
                        class={classes!(error.as_ref().map(|_| "invalid"))}
                        value={value}
                        oninput={text_input_callback(link, index)}
                    />
                    {
                        match error {
                            Some(reason) => html! { <span class="field-error">{ reason }</span> },
                            None => html! {},
                        }
                    }
                </>
            }
        }
        FieldKind::Select(options) => {
            let current = value.clone();
            html! {
                <select onchange={select_callback(link, index)}>
                    {
                        options
                            .iter()
                            .map(|option| html! {
                                <option value={*option} selected={*option == current}>
                                    { *option }
                                </option>
                            })
                            .collect::<Html>()
                    }
                </select>
            }
        }
    };

    html! {
        <label class="form-field">
            <span class="field-label">{ label }</span>
            { control }
        </label>
    }
}

/// Markdown fields get an editor/preview tab pair.
fn build_markdown_field<S: ResourceSchema>(
    form: &FormState<S>,
    index: usize,
    value: &str,
    link: &Scope<ResourceAdmin<S>>,
) -> Html {
    html! {
        <div class="markdown-field">
            <div class="tab-bar">
                <button
                    type="button"
                    class={classes!("tab-btn", if !form.preview { "active" } else { "" })}
                    onclick={link.callback(|_| Msg::TogglePreview(false))}
                >
                    { "Editor" }
                </button>
                <button
                    type="button"
                    class={classes!("tab-btn", if form.preview { "active" } else { "" })}
                    onclick={link.callback(|_| Msg::TogglePreview(true))}
                >
                    { "Preview" }
                </button>
            </div>
            {
                if form.preview {
                    let rendered = render_markdown(value);
                    html! { <div class="markdown-preview">{ Html::from_html_unchecked(rendered.into()) }</div> }
                } else {
                    html! {
                        <textarea
                            rows="10"
                            value={value.to_string()}
                            oninput={textarea_callback(link, index)}
                        />
                    }
                }
            }
        </div>
    }
}

fn render_markdown(text: &str) -> String {
    let parser = Parser::new(text);
    let mut output = String::new();
    md_html::push_html(&mut output, parser);
    output
}

fn text_input_callback<S: ResourceSchema>(
    link: &Scope<ResourceAdmin<S>>,
    index: usize,
) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        Msg::FieldInput(index, value)
    })
}

fn textarea_callback<S: ResourceSchema>(
    link: &Scope<ResourceAdmin<S>>,
    index: usize,
) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
        Msg::FieldInput(index, value)
    })
}

fn select_callback<S: ResourceSchema>(
    link: &Scope<ResourceAdmin<S>>,
    index: usize,
) -> Callback<Event> {
    link.callback(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        Msg::FieldInput(index, value)
    })
}
