//! Alert messages for HTMX requests that fail after the page has loaded.
//!
//! Alerts are swapped into the `#alert-container` element that [crate::html::base]
//! places at the bottom of every page.

use maud::{Markup, html};

/// An error alert with a headline and optional details.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    pub fn into_html(self) -> Markup {
        html!(
            div
                role="alert"
                class="flex items-start p-4 mb-4 text-red-800 rounded-lg bg-red-50
                    dark:bg-gray-800 dark:text-red-400"
                onclick="this.remove()"
            {
                div class="ms-3 text-sm font-medium"
                {
                    p class="font-semibold" { (self.message) }

                    @if !self.details.is_empty() {
                        p { (self.details) }
                    }
                }
            }
        )
    }
}
