use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::contact::ContactOrigin;
use crate::content::Language;

/// Top level "pages" of the site. Exactly one is showing at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Services,
    Terms,
    Privacy,
}

/// In-page sections of the home page that the header tracks as active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::About, Section::Contact];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// Tabs on the services page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ServicesTab {
    #[default]
    Influencers,
    Talent,
    Brands,
}

impl ServicesTab {
    pub const ALL: [ServicesTab; 3] = [
        ServicesTab::Influencers,
        ServicesTab::Talent,
        ServicesTab::Brands,
    ];
}

/// A pending request for the view layer to bring an anchor into view.
/// `seq` grows on every request so repeated clicks on the same link still scroll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub seq: u32,
    pub anchor: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub page: Page,
    pub section: Section,
    pub services_tab: ServicesTab,
    pub language: Language,
    pub mobile_menu_open: bool,
    pub contact_dialog_open: bool,
    pub scroll_request: Option<ScrollRequest>,
}

pub enum NavAction {
    Navigate(Page),
    /// The browser location changed underneath us (back/forward, deep link).
    RouteChanged(Page),
    ScrollToSection(String),
    ToggleMobileMenu,
    CloseMobileMenu,
    OpenContactDialog,
    CloseContactDialog,
    /// A contact form delivered its message.
    ContactSent(ContactOrigin),
    SelectServicesTab(ServicesTab),
    SetLanguage(Language),
}

impl NavigationState {
    pub fn at(page: Page) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn navigate(&mut self, page: Page) {
        info!("Navigating to {:?}", page);
        self.page = page;
        match page {
            Page::Home => self.section = Section::Home,
            Page::Services => self.services_tab = ServicesTab::default(),
            Page::Terms | Page::Privacy => {}
        }
        self.mobile_menu_open = false;
    }

    pub fn scroll_to_section(&mut self, anchor: &str) {
        // Anchors only exist on the home page.
        if self.page != Page::Home {
            self.navigate(Page::Home);
        }
        if let Some(section) = Section::from_anchor(anchor) {
            self.section = section;
        }
        self.mobile_menu_open = false;
        let seq = self.scroll_request.as_ref().map_or(0, |r| r.seq.wrapping_add(1));
        self.scroll_request = Some(ScrollRequest {
            seq,
            anchor: anchor.to_string(),
        });
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Navigate(page) => self.navigate(page),
            NavAction::RouteChanged(page) => {
                if page != self.page {
                    self.navigate(page);
                }
            }
            NavAction::ScrollToSection(anchor) => self.scroll_to_section(&anchor),
            NavAction::ToggleMobileMenu => self.toggle_mobile_menu(),
            NavAction::CloseMobileMenu => self.mobile_menu_open = false,
            NavAction::OpenContactDialog => {
                self.contact_dialog_open = true;
                self.mobile_menu_open = false;
            }
            NavAction::CloseContactDialog => self.contact_dialog_open = false,
            NavAction::ContactSent(ContactOrigin::Dialog) => self.contact_dialog_open = false,
            NavAction::ContactSent(ContactOrigin::Section) => {}
            NavAction::SelectServicesTab(tab) => self.services_tab = tab,
            NavAction::SetLanguage(language) => self.language = language,
        }
    }
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Handle shared with every component below `Site` through a `ContextProvider`.
pub type NavContext = UseReducerHandle<NavigationState>;

#[cfg(test)]
mod tests {
    use super::*;

    const PAGES: [Page; 4] = [Page::Home, Page::Services, Page::Terms, Page::Privacy];

    #[test]
    fn starts_on_home_page_and_section() {
        let state = NavigationState::default();
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.section, Section::Home);
        assert!(!state.mobile_menu_open);
        assert!(!state.contact_dialog_open);
        assert!(state.scroll_request.is_none());
    }

    #[test]
    fn navigate_sets_every_page() {
        for target in PAGES {
            for start in PAGES {
                let mut state = NavigationState::at(start);
                state.section = Section::About;
                state.navigate(target);
                assert_eq!(state.page, target);
                if target == Page::Home {
                    assert_eq!(state.section, Section::Home);
                }
            }
        }
    }

    #[test]
    fn navigate_closes_open_mobile_menu() {
        for target in PAGES {
            let mut state = NavigationState::default();
            state.toggle_mobile_menu();
            assert!(state.mobile_menu_open);
            state.navigate(target);
            assert!(!state.mobile_menu_open);
        }
    }

    #[test]
    fn entering_services_resets_tab() {
        let mut state = NavigationState::at(Page::Services);
        state.apply(NavAction::SelectServicesTab(ServicesTab::Brands));
        state.navigate(Page::Terms);
        state.navigate(Page::Services);
        assert_eq!(state.services_tab, ServicesTab::Influencers);
    }

    #[test]
    fn scroll_to_contact_keeps_page() {
        let mut state = NavigationState::default();
        state.scroll_to_section("contact");
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.section, Section::Contact);
        assert_eq!(
            state.scroll_request,
            Some(ScrollRequest {
                seq: 0,
                anchor: "contact".to_string()
            })
        );
    }

    #[test]
    fn scroll_from_other_page_returns_home() {
        let mut state = NavigationState::at(Page::Privacy);
        state.scroll_to_section("about");
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.section, Section::About);
    }

    #[test]
    fn scroll_to_untracked_anchor_still_requests_scroll() {
        let mut state = NavigationState::default();
        state.scroll_to_section("about");
        state.scroll_to_section("services");
        assert_eq!(state.section, Section::About);
        let request = state.scroll_request.expect("scroll requested");
        assert_eq!(request.anchor, "services");
        assert_eq!(request.seq, 1);
    }

    #[test]
    fn repeated_scroll_bumps_sequence() {
        let mut state = NavigationState::default();
        state.scroll_to_section("contact");
        state.scroll_to_section("contact");
        assert_eq!(state.scroll_request.map(|r| r.seq), Some(1));
    }

    #[test]
    fn scroll_closes_mobile_menu() {
        let mut state = NavigationState::default();
        state.toggle_mobile_menu();
        state.scroll_to_section("about");
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn toggle_mobile_menu_twice_is_identity() {
        for open in [false, true] {
            let mut state = NavigationState {
                mobile_menu_open: open,
                ..NavigationState::default()
            };
            state.toggle_mobile_menu();
            state.toggle_mobile_menu();
            assert_eq!(state.mobile_menu_open, open);
        }
    }

    #[test]
    fn route_change_to_current_page_keeps_section() {
        let mut state = NavigationState::default();
        state.scroll_to_section("contact");
        state.apply(NavAction::RouteChanged(Page::Home));
        assert_eq!(state.section, Section::Contact);

        state.apply(NavAction::RouteChanged(Page::Terms));
        assert_eq!(state.page, Page::Terms);
    }

    #[test]
    fn opening_dialog_closes_menu() {
        let mut state = NavigationState::default();
        state.apply(NavAction::ToggleMobileMenu);
        state.apply(NavAction::OpenContactDialog);
        assert!(state.contact_dialog_open);
        assert!(!state.mobile_menu_open);

        state.apply(NavAction::CloseContactDialog);
        assert!(!state.contact_dialog_open);
    }

    #[test]
    fn sent_message_closes_only_the_dialog_it_came_from() {
        let mut state = NavigationState::default();
        state.apply(NavAction::OpenContactDialog);

        state.apply(NavAction::ContactSent(ContactOrigin::Section));
        assert!(state.contact_dialog_open);

        state.apply(NavAction::ContactSent(ContactOrigin::Dialog));
        assert!(!state.contact_dialog_open);
    }

    #[test]
    fn reduce_returns_same_rc_when_unchanged() {
        let state = Rc::new(NavigationState::default());
        let next = state.clone().reduce(NavAction::CloseMobileMenu);
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(NavAction::Navigate(Page::Terms));
        assert_eq!(next.page, Page::Terms);
        assert_eq!(state.page, Page::Home);
    }

    #[test]
    fn section_anchor_round_trips() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("missing"), None);
    }
}
