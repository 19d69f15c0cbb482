use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::content::{self, Language};
use crate::state::{NavAction, NavContext, Page, Section};

#[derive(Clone, Copy, PartialEq)]
enum NavTarget {
    Anchor(Section),
    Page(Page),
}

#[derive(Properties, PartialEq)]
pub struct BrandMarkProps {
    pub language: Language,
}

#[function_component(BrandMark)]
pub fn brand_mark(props: &BrandMarkProps) -> Html {
    html! {
        <div class="brand-mark">
            <div class="brand-logo">{"📈"}</div>
            <span class="brand-name gradient-text">{content::copy(props.language).brand_name}</span>
        </div>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let nav = use_context::<NavContext>();
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                    is_scrolled.set(scroll_y > 16.0);
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let Some(nav) = nav else {
        return html! {};
    };
    let copy = content::copy(nav.language);

    let go = |target: NavTarget| {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match target {
                NavTarget::Anchor(section) => {
                    nav.dispatch(NavAction::ScrollToSection(section.anchor().to_string()))
                }
                NavTarget::Page(page) => nav.dispatch(NavAction::Navigate(page)),
            }
        })
    };

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMobileMenu);
        })
    };

    let collaborate = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::OpenContactDialog);
        })
    };

    let switch_language = {
        let nav = nav.clone();
        let next = nav.language.other();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::SetLanguage(next)))
    };

    let items = [
        (copy.nav_home, NavTarget::Anchor(Section::Home)),
        (copy.nav_about, NavTarget::Anchor(Section::About)),
        (copy.nav_services, NavTarget::Page(Page::Services)),
        (copy.nav_contact, NavTarget::Anchor(Section::Contact)),
    ];
    let is_active = |target: NavTarget| match target {
        NavTarget::Anchor(section) => nav.page == Page::Home && nav.section == section,
        NavTarget::Page(page) => nav.page == page,
    };

    let menu_class = if nav.mobile_menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                {
                    if nav.page == Page::Home {
                        html! {
                            <a href="#home" class="nav-logo" onclick={go(NavTarget::Anchor(Section::Home))}>
                                <BrandMark language={nav.language} />
                            </a>
                        }
                    } else {
                        html! {
                            <button class="back-button" onclick={go(NavTarget::Page(Page::Home))}>
                                {"← "}{copy.back_home}
                            </button>
                        }
                    }
                }

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    { if nav.mobile_menu_open { "✕" } else { "☰" } }
                </button>
                <nav class={menu_class}>
                    { for items.iter().map(|(label, target)| html! {
                        <button
                            class={classes!("nav-link", is_active(*target).then(|| "active"))}
                            onclick={go(*target)}
                        >
                            {*label}
                        </button>
                    }) }
                    <button class="language-switch" onclick={switch_language} title="Language">
                        {nav.language.other().code()}
                    </button>
                    <button class="primary-button" onclick={collaborate}>
                        {copy.nav_collaborate}
                    </button>
                </nav>
            </div>
        </header>
    }
}
