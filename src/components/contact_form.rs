use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{abortable, AbortHandle};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_unmount;

use crate::components::notification::{notify, ToastContext, ToastKind};
use crate::config;
use crate::contact::service::service_for;
use crate::contact::{
    ContactField, ContactOrigin, ContactState, Resolution, SubmissionError, SubmissionStatus,
    SubmitOutcome,
};
use crate::content::{self, SiteCopy};
use crate::state::{NavAction, NavContext};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// The section form and the dialog form can be mounted together, each with its own draft.
    pub origin: ContactOrigin,
}

fn field_callback(
    state: &Rc<RefCell<ContactState>>,
    rerender: &Callback<()>,
    field: ContactField,
) -> Callback<InputEvent> {
    let state = state.clone();
    let rerender = rerender.clone();
    Callback::from(move |e: InputEvent| {
        let value = e
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()));
        if let Some(value) = value {
            state.borrow_mut().edit(field, value);
            rerender.emit(());
        }
    })
}

pub fn mailto_link(subject: &str) -> String {
    format!(
        "mailto:{}?subject={}",
        config::CONTACT_EMAIL,
        urlencoding::encode(subject)
    )
}

fn missing_fields_text(copy: &SiteCopy, missing: &[ContactField]) -> String {
    let labels = missing
        .iter()
        .map(|f| f.localized_label(copy))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} {}", copy.toast_missing, labels)
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let nav = use_context::<NavContext>();
    let language = nav.as_ref().map(|nav| nav.language).unwrap_or_default();
    let copy = content::copy(language);
    let toasts = use_context::<ToastContext>();
    let origin = props.origin;
    let compact = origin == ContactOrigin::Dialog;
    let state = use_mut_ref(ContactState::default);
    let pending = use_mut_ref(|| None::<(u64, AbortHandle)>);
    let update = use_force_update();
    let rerender = {
        let update = update.clone();
        Callback::from(move |_: ()| update.force_update())
    };
    let service = use_state(|| service_for(config::contact_mode()));

    // Leaving the page or closing the dialog mid-send cancels the request, say so.
    {
        let state = state.clone();
        let pending = pending.clone();
        let toasts = toasts.clone();
        use_unmount(move || {
            if let Some((_, handle)) = pending.borrow_mut().take() {
                handle.abort();
            }
            if state.borrow_mut().discard() {
                if let Some(toasts) = &toasts {
                    notify(toasts, ToastKind::Error, copy.toast_cancelled);
                }
            }
        });
    }

    let onsubmit = {
        let state = state.clone();
        let pending = pending.clone();
        let rerender = rerender.clone();
        let service = service.clone();
        let toasts = toasts.clone();
        let nav = nav.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let outcome = state.borrow_mut().submit();
            match outcome {
                SubmitOutcome::Rejected(err) => {
                    if let Some(toasts) = &toasts {
                        notify(toasts, ToastKind::Error, missing_fields_text(copy, &err.missing));
                    }
                }
                SubmitOutcome::Busy => {}
                SubmitOutcome::Dispatched { ticket, message } => {
                    let (send, handle) = abortable(service.send(message));
                    *pending.borrow_mut() = Some((ticket, handle));
                    rerender.emit(());

                    let state = state.clone();
                    let pending = pending.clone();
                    let rerender = rerender.clone();
                    let toasts = toasts.clone();
                    let nav = nav.clone();
                    spawn_local(async move {
                        let result = send.await.unwrap_or(Err(SubmissionError::Cancelled));
                        {
                            let mut pending = pending.borrow_mut();
                            if matches!(*pending, Some((t, _)) if t == ticket) {
                                *pending = None;
                            }
                        }
                        let resolution = state.borrow_mut().resolve(ticket, result);
                        let sent = resolution == Resolution::Sent;
                        match resolution {
                            Resolution::Ignored => return,
                            Resolution::Sent => {
                                if let Some(toasts) = &toasts {
                                    notify(toasts, ToastKind::Success, copy.toast_sent);
                                }
                            }
                            Resolution::Failed(_) => {
                                if let Some(toasts) = &toasts {
                                    notify(toasts, ToastKind::Error, copy.toast_failed);
                                }
                            }
                        }
                        rerender.emit(());
                        if let (true, Some(nav)) = (sent, &nav) {
                            nav.dispatch(NavAction::ContactSent(origin));
                        }
                    });
                }
            }
        })
    };

    let current = state.borrow().clone();
    let sending = current.is_sending();
    let id = |field: ContactField| format!("{}-{}", origin.id_prefix(), field.key());
    let error_for = |field: ContactField| -> Html {
        match current.field_error(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    };
    let input = |field: ContactField, label: &'static str, placeholder: Option<&'static str>, required: bool, kind: &'static str| {
        html! {
            <div class="form-field">
                <label for={id(field)}>{label}</label>
                <input
                    id={id(field)}
                    type={kind}
                    value={current.draft.get(field).to_string()}
                    placeholder={placeholder}
                    {required}
                    disabled={sending}
                    oninput={field_callback(&state, &rerender, field)}
                />
                { error_for(field) }
            </div>
        }
    };

    html! {
        <form class={classes!("contact-form", compact.then(|| "compact"))} {onsubmit}>
            <div class="form-row">
                { input(ContactField::Name, copy.label_name, None, true, "text") }
                { input(ContactField::Email, copy.label_email, None, true, "email") }
            </div>
            <div class="form-row">
                { input(ContactField::Instagram, copy.label_instagram, Some(copy.placeholder_instagram), false, "text") }
                { input(ContactField::Facebook, copy.label_facebook, Some(copy.placeholder_facebook), false, "text") }
            </div>
            <div class="form-field">
                <label for={id(ContactField::Message)}>{copy.label_message}</label>
                <textarea
                    id={id(ContactField::Message)}
                    rows={if compact { "4" } else { "5" }}
                    placeholder={copy.placeholder_message}
                    value={current.draft.message.clone()}
                    required=true
                    disabled={sending}
                    oninput={field_callback(&state, &rerender, ContactField::Message)}
                />
                { error_for(ContactField::Message) }
            </div>
            {
                if let SubmissionStatus::Failed(reason) = &current.status {
                    html! { <p class="form-status error">{copy.toast_failed}<br /><small>{reason}</small></p> }
                } else {
                    html! {}
                }
            }
            <button type="submit" class="primary-button full-width" disabled={sending}>
                { if sending { copy.sending } else { copy.send } }
                <span class="button-icon">{"✉"}</span>
            </button>
            <div class="reach-directly">
                <p>{copy.reach_directly}</p>
                <a href={mailto_link("Collaboration inquiry")}>{"✉ "}{config::CONTACT_EMAIL}</a>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject() {
        assert_eq!(
            mailto_link("Privacy Policy Inquiry"),
            "mailto:contact@socialriser.com?subject=Privacy%20Policy%20Inquiry"
        );
    }

    #[test]
    fn missing_text_uses_localized_labels() {
        let text = missing_fields_text(
            content::copy(content::Language::Es),
            &[ContactField::Name, ContactField::Message],
        );
        assert_eq!(
            text,
            "Completa los campos obligatorios: Nombre, Cuéntanos sobre tu proyecto u objetivos"
        );
    }
}
