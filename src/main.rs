use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod favorites;
mod scroll;
mod state;
mod contact;
mod components {
    pub mod notification;
    pub mod contact_form;
    pub mod contact_dialog;
    pub mod nav;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod termsprivacy;
}

use components::{
    contact_dialog::ContactDialog,
    footer::Footer,
    nav::Nav,
    notification::{ToastContext, ToastStack, Toaster},
};
use pages::{
    home::Home,
    services::Services,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};
use state::{NavAction, NavContext, NavigationState, Page, ScrollRequest};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn page(&self) -> Page {
        match self {
            Route::Home | Route::NotFound => Page::Home,
            Route::Services => Page::Services,
            Route::Terms => Page::Terms,
            Route::Privacy => Page::Privacy,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home,
            Page::Services => Route::Services,
            Page::Terms => Route::Terms,
            Page::Privacy => Route::Privacy,
        }
    }
}

fn render(page: Page) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Page::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Page::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Page::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
    }
}

/// Owns the navigation state and keeps it in step with the browser location.
#[function_component(Site)]
fn site() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let nav = use_reducer({
        let page = route.page();
        move || NavigationState::at(page)
    });
    let toasts = use_reducer(ToastStack::default);
    let navigator = use_navigator();

    // Back/forward and typed URLs.
    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |route: &Route| {
                nav.dispatch(NavAction::RouteChanged(route.page()));
                || ()
            },
            route.clone(),
        );
    }

    // Page changes made through the UI.
    {
        let route = route.clone();
        use_effect_with_deps(
            move |page: &Page| {
                if route.page() != *page {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::from(*page));
                    }
                    if *page != Page::Home {
                        scroll::scroll_to_top();
                    }
                }
                || ()
            },
            nav.page,
        );
    }

    // Scroll requests run after the target page has been rendered.
    use_effect_with_deps(
        move |request: &Option<ScrollRequest>| {
            if let Some(request) = request {
                scroll::scroll_into_view(&request.anchor);
            }
            || ()
        },
        nav.scroll_request.clone(),
    );

    html! {
        <ContextProvider<NavContext> context={nav.clone()}>
            <ContextProvider<ToastContext> context={toasts}>
                <Nav />
                { render(nav.page) }
                <Footer />
                <ContactDialog />
                <Toaster />
            </ContextProvider<ToastContext>>
        </ContextProvider<NavContext>>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Site />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_pages_and_back() {
        for page in [Page::Home, Page::Services, Page::Terms, Page::Privacy] {
            assert_eq!(Route::from(page).page(), page);
        }
        assert_eq!(Route::NotFound.page(), Page::Home);
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::from(Page::Services).to_path(), "/services");
        assert_eq!(Route::recognize("/terms"), Some(Route::Terms));
    }
}
