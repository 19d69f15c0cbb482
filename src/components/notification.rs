use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

/// Oldest toasts fall off once this many are showing.
const MAX_TOASTS: usize = 3;

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, text) => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    kind,
                    text,
                });
                next.next_id = next.next_id.wrapping_add(1);
                if next.toasts.len() > MAX_TOASTS {
                    next.toasts.remove(0);
                }
            }
            ToastAction::Dismiss(id) => {
                next.toasts.retain(|t| t.id != id);
                if next.toasts.len() == self.toasts.len() {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

pub type ToastContext = UseReducerHandle<ToastStack>;

pub fn notify(toasts: &ToastContext, kind: ToastKind, text: impl Into<String>) {
    toasts.dispatch(ToastAction::Push(kind, text.into()));
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || on_dismiss.emit(id));
                // Dropping the timeout on unmount cancels it.
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };
    let icon = match props.toast.kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "!",
    };

    html! {
        <div class={class} role="status">
            <span class="toast-icon">{icon}</span>
            <span class="toast-text">{&props.toast.text}</span>
            <button class="toast-close" onclick={close} aria-label="Dismiss">{"✕"}</button>
        </div>
    }
}

#[function_component(Toaster)]
pub fn toaster() -> Html {
    let toasts = use_context::<ToastContext>();
    let Some(toasts) = toasts else {
        return html! {};
    };
    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toaster">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 1000;
                        max-width: calc(100vw - 3rem);
                    }
                    .toast {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        min-width: 280px;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: rgba(26, 26, 26, 0.95);
                        color: #fff;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast-success { border-left: 4px solid #22c55e; }
                    .toast-error { border-left: 4px solid #ef4444; }
                    .toast-icon { font-weight: bold; }
                    .toast-text { flex: 1; line-height: 1.4; }
                    .toast-close {
                        background: none;
                        border: none;
                        color: #999;
                        cursor: pointer;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            { for toasts.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(stack: Rc<ToastStack>, text: &str) -> Rc<ToastStack> {
        stack.reduce(ToastAction::Push(ToastKind::Success, text.to_string()))
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let stack = push(push(Rc::new(ToastStack::default()), "a"), "b");
        let ids: Vec<u32> = stack.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn oldest_toast_falls_off() {
        let mut stack = Rc::new(ToastStack::default());
        for text in ["a", "b", "c", "d"] {
            stack = push(stack, text);
        }
        let texts: Vec<&str> = stack.toasts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c", "d"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let stack = push(push(Rc::new(ToastStack::default()), "a"), "b");
        let stack = stack.reduce(ToastAction::Dismiss(0));
        assert_eq!(stack.toasts.len(), 1);
        assert_eq!(stack.toasts[0].text, "b");
    }

    #[test]
    fn dismissing_unknown_id_keeps_same_stack() {
        let stack = push(Rc::new(ToastStack::default()), "a");
        let next = stack.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&stack, &next));
    }
}
