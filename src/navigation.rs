//! The navigation bar and the slide-out menu.
//!
//! The menu keeps no state on the server. The toggle button posts the current
//! state, and [post_toggle_menu] answers with the menu rendered in the new
//! state, which replaces the old menu including its button.

use axum::Form;
use maud::{Markup, html};
use serde::Deserialize;

use crate::endpoints;

/// Whether the slide-out menu is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    /// `true` when the sidebar is showing.
    pub open: bool,
}

impl MenuState {
    /// The state the menu is in when a page first loads.
    pub fn closed() -> Self {
        Self { open: false }
    }

    /// Flip the state.
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }
}

/// Template for a link in the menu.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block rounded-lg bg-blue-50 px-3 py-2 font-semibold text-blue-700 \
            dark:bg-blue-900/30 dark:text-blue-200"
        } else {
            "block rounded-lg px-3 py-2 text-gray-700 hover:bg-gray-100 \
            hover:text-blue-700 dark:text-gray-200 dark:hover:bg-gray-800/80 \
            dark:hover:text-blue-200"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

/// The slide-out menu and the button that opens and closes it.
pub struct Menu<'a> {
    state: MenuState,
    active_endpoint: &'a str,
    links: Vec<Link<'a>>,
}

impl<'a> Menu<'a> {
    /// Create the menu in `state`.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(state: MenuState, active_endpoint: &'a str) -> Self {
        let links = vec![
            Link {
                url: endpoints::DASHBOARD_VIEW,
                title: "Home",
                is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
            },
            Link {
                url: endpoints::DATA_VIEW,
                title: "Data",
                is_current: active_endpoint == endpoints::DATA_VIEW,
            },
            Link {
                url: endpoints::CHARTS_ANCHOR,
                title: "Charts",
                is_current: false,
            },
        ];

        Self {
            state,
            active_endpoint,
            links,
        }
    }

    pub fn into_html(self) -> Markup {
        let form_values = serde_json::json!({
            "open": self.state.open,
            "active": self.active_endpoint,
        })
        .to_string();
        let button_label = if self.state.open {
            "Close menu"
        } else {
            "Open menu"
        };

        html!(
            div id="menu"
            {
                button
                    type="button"
                    hx-post=(endpoints::TOGGLE_MENU)
                    hx-vals=(form_values)
                    hx-target="#menu"
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    aria-expanded=(if self.state.open { "true" } else { "false" })
                    aria-label=(button_label)
                    class="inline-flex items-center justify-center p-2 w-10 h-10
                        text-gray-500 rounded-lg hover:bg-gray-100 focus:outline-hidden
                        focus:ring-2 focus:ring-gray-200 dark:text-gray-400
                        dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                {
                    @if self.state.open { "✕" } @else { "☰" }
                }

                @if self.state.open {
                    aside
                        id="sidebar"
                        class="fixed top-0 left-0 z-40 w-64 h-screen p-4 pt-20
                            bg-white/95 shadow-xl backdrop-blur
                            dark:bg-gray-900/95"
                        aria-label="Sidebar"
                    {
                        ul class="flex flex-col gap-1 text-sm font-medium"
                        {
                            @for link in self.links {
                                li { (link.into_html()) }
                            }
                        }
                    }
                }
            }
        )
    }
}

/// The bar across the top of every page with the menu button and title.
pub struct NavBar<'a> {
    menu: Menu<'a>,
}

impl NavBar<'_> {
    /// Get the navigation bar with the menu closed.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        NavBar {
            menu: Menu::new(MenuState::closed(), active_endpoint),
        }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="fixed top-0 inset-x-0 z-50 bg-white border-gray-200 dark:bg-gray-900"
            {
                div class="max-w-screen-xl flex items-center gap-4 mx-auto p-4"
                {
                    (self.menu.into_html())

                    a href=(endpoints::DASHBOARD_VIEW) class="flex items-center"
                    {
                        span
                            class="self-center text-2xl font-semibold
                                whitespace-nowrap dark:text-white"
                        {
                            "Inflation in Ecuador"
                        }
                    }
                }
            }
        )
    }
}

/// The form the menu button posts.
#[derive(Debug, Deserialize)]
pub struct MenuForm {
    /// The state of the menu before the click.
    #[serde(default)]
    pub open: bool,
    /// The page the menu is on, used to highlight its link.
    #[serde(default)]
    pub active: String,
}

/// Render the menu in the opposite of the posted state.
pub async fn post_toggle_menu(Form(form): Form<MenuForm>) -> Markup {
    let state = MenuState { open: form.open }.toggle();
    tracing::debug!("Menu toggled, open: {}", state.open);

    Menu::new(state, &form.active).into_html()
}
