use std::rc::Rc;

use gloo::net::http::Request;
use portfolio_core::content::{ContactLink, LinkKind, CONTACT_LINKS};
use portfolio_core::{
    deliver, ContactError, ContactField, ContactForm, ContactRequest, ContactTransport,
    JSON_CONTENT_TYPE,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app_router;

const INPUT_CLASS: &str = "mt-1 w-full rounded-xl bg-white/70 dark:bg-slate-900/60 backdrop-blur border border-slate-200 dark:border-slate-800 px-3 py-2 outline-none focus:ring-2 focus:ring-cyan-400";
const LABEL_CLASS: &str = "text-sm text-slate-600 dark:text-slate-300";

pub(crate) struct FetchTransport;

impl ContactTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<u16, ContactError> {
        let request = Request::post(url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(body.to_string())
            .map_err(|err| ContactError::Transport(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ContactError::Transport(err.to_string()))?;
        Ok(response.status())
    }
}

#[derive(Clone, Default, PartialEq)]
struct ContactState {
    form: ContactForm,
    attempt: u32,
    outgoing: Option<Rc<ContactRequest>>,
}

enum ContactAction {
    Edit(ContactField, String),
    Begin(Rc<str>),
    Finish(Result<(), ContactError>),
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.form.set_field(field, value),
            ContactAction::Begin(base) => match next.form.begin(&base) {
                Ok(request) => {
                    next.attempt = next.attempt.wrapping_add(1);
                    next.outgoing = Some(Rc::new(request));
                }
                Err(err) => {
                    gloo::console::log!("contact submit skipped", err.to_string());
                    return self;
                }
            },
            ContactAction::Finish(outcome) => {
                next.form.finish(&outcome);
                next.outgoing = None;
            }
        }
        Rc::new(next)
    }
}

fn on_field_input(state: UseReducerHandle<ContactState>, field: ContactField) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        let value = match field {
            ContactField::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
            _ => event.target_unchecked_into::<HtmlInputElement>().value(),
        };
        state.dispatch(ContactAction::Edit(field, value));
    })
}

fn link_view(link: &ContactLink) -> Html {
    let class = match link.kind {
        LinkKind::Github => "flex items-center gap-2 text-slate-700 dark:text-slate-300 hover:underline",
        LinkKind::Email | LinkKind::Linkedin => "flex items-center gap-2 text-sky-600 hover:underline",
    };
    if link.opens_new_tab() {
        html! {
            <a href={link.href} target="_blank" rel="noreferrer" class={class}>{ link.label }</a>
        }
    } else {
        html! { <a href={link.href} class={class}>{ link.label }</a> }
    }
}

#[function_component(ContactSection)]
pub(crate) fn contact_section() -> Html {
    let state = use_reducer(ContactState::default);
    let form = &state.form;
    let submitting = form.is_submitting();

    {
        let dispatcher = state.dispatcher();
        let outgoing = state.outgoing.clone();
        use_effect_with(state.attempt, move |_| {
            if let Some(request) = outgoing {
                spawn_local(async move {
                    let outcome = deliver(&FetchTransport, &request).await;
                    match &outcome {
                        Ok(()) => gloo::console::log!("contact message sent"),
                        Err(err) => gloo::console::warn!("contact submit failed", err.to_string()),
                    }
                    dispatcher.dispatch(ContactAction::Finish(outcome));
                });
            }
            || ()
        });
    }

    let onsubmit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(ContactAction::Begin(app_router::backend_base().into()));
        })
    };

    html! {
        <div class="grid md:grid-cols-3 gap-6">
            <form {onsubmit} class="md:col-span-2 space-y-4">
                <div class="grid sm:grid-cols-2 gap-4">
                    <div>
                        <label class={LABEL_CLASS} for="contact-name">{ "Name" }</label>
                        <input
                            id="contact-name"
                            name="name"
                            required={true}
                            placeholder="Your name"
                            class={INPUT_CLASS}
                            value={form.fields().name.clone()}
                            oninput={on_field_input(state.clone(), ContactField::Name)}
                        />
                    </div>
                    <div>
                        <label class={LABEL_CLASS} for="contact-email">{ "Email" }</label>
                        <input
                            id="contact-email"
                            type="email"
                            name="email"
                            required={true}
                            placeholder="you@example.com"
                            class={INPUT_CLASS}
                            value={form.fields().email.clone()}
                            oninput={on_field_input(state.clone(), ContactField::Email)}
                        />
                    </div>
                </div>
                <div>
                    <label class={LABEL_CLASS} for="contact-message">{ "Message" }</label>
                    <textarea
                        id="contact-message"
                        name="message"
                        required={true}
                        rows="5"
                        placeholder="How can I help?"
                        class={INPUT_CLASS}
                        value={form.fields().message.clone()}
                        oninput={on_field_input(state.clone(), ContactField::Message)}
                    />
                </div>
                if let Some(message) = form.error_message() {
                    <div class="text-sm text-rose-500" role="alert">{ message }</div>
                }
                if let Some(message) = form.success_message() {
                    <div class="text-sm text-emerald-600" role="status">{ message }</div>
                }
                <button
                    type="submit"
                    disabled={submitting}
                    class="inline-flex items-center gap-2 rounded-full px-4 py-2.5 text-sm font-medium bg-gradient-to-r from-sky-600 to-cyan-500 text-white shadow hover:shadow-md transition disabled:opacity-60"
                >
                    { if submitting { "Sending\u{2026}" } else { "Send Message" } }
                </button>
            </form>
            <div class="space-y-3">
                { for CONTACT_LINKS.iter().map(link_view) }
            </div>
        </div>
    }
}
