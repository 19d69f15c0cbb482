use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::contact::ContactOrigin;
use crate::content;
use crate::state::{NavAction, NavContext};

/// Modal version of the contact form. Closing it unmounts the form, which discards the
/// draft and cancels an in-flight submission. A delivered message closes it through
/// `NavAction::ContactSent`.
#[function_component(ContactDialog)]
pub fn contact_dialog() -> Html {
    let nav = use_context::<NavContext>();
    let open = nav.as_ref().map_or(false, |nav| nav.contact_dialog_open);

    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = nav.filter(|_| *open).map(|nav| {
                    Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            nav.dispatch(NavAction::CloseContactDialog);
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>)
                });
                let document = web_sys::window().and_then(|w| w.document());
                if let (Some(document), Some(listener)) = (&document, &listener) {
                    let _ = document
                        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let (Some(document), Some(listener)) = (document, listener) {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            open,
        );
    }

    let Some(nav) = nav.filter(|_| open) else {
        return html! {};
    };
    let copy = content::copy(nav.language);

    let close = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::CloseContactDialog))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-overlay" onclick={close.clone()}>
            <div class="dialog" role="dialog" aria-modal="true" onclick={stop}>
                <button class="dialog-close" onclick={close} aria-label="Close">{"✕"}</button>
                <div class="dialog-header">
                    <h2>
                        {copy.dialog_title_lead}{" "}
                        <span class="gradient-text">{copy.dialog_title_highlight}</span>
                    </h2>
                    <p>{copy.contact_subtitle}</p>
                </div>
                <ContactForm origin={ContactOrigin::Dialog} />
            </div>
        </div>
    }
}
