//! Card components for the dashboard.
//!
//! Provides:
//! - The two "latest" cards for the most recent observation
//! - The two "selected" cards for the point clicked on the chart
//! - The year range shortcut cards

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{CARD_CAPTION_STYLE, CARD_STYLE, CARD_VALUE_STYLE},
    ipc::{LatestSummary, PointCards, RangeShortcut},
};

/// The HTML element ID that chart clicks swap the selected cards into.
pub(super) const SELECTED_POINT_ID: &str = "selected-point";

fn card(title: &str, caption: &str, value: &str) -> Markup {
    html! {
        div class=(CARD_STYLE) {
            h4 class="text-sm font-semibold mb-1" { (title) }
            p class=(CARD_CAPTION_STYLE) { (caption) }
            p class=(CARD_VALUE_STYLE) { (value) }
        }
    }
}

/// Renders the cards for the most recent observation in the dataset.
pub(super) fn latest_cards_view(summary: &LatestSummary) -> Markup {
    html! {
        section id="latest" class="w-full grid grid-cols-1 sm:grid-cols-2 gap-4 mb-4" {
            (card("Latest index", &summary.date_label, &summary.index_value))
            (card("Latest annual change", &summary.date_label, &summary.yoy_value))
        }
    }
}

/// Renders the cards for the point clicked on the chart.
///
/// The whole section is replaced on each click.
pub(super) fn point_cards_view(cards: &PointCards) -> Markup {
    html! {
        section id=(SELECTED_POINT_ID) class="w-full grid grid-cols-1 sm:grid-cols-2 gap-4 mb-4" {
            (card("Selected index", &cards.date_label, &cards.index_value))
            (card("Selected annual change", &cards.yoy_label, &cards.yoy_value))
        }
    }
}

/// Renders one button per year range shortcut.
///
/// Each button posts to its own route and replaces `target` with the
/// response.
pub(super) fn shortcut_cards_view(target: &str) -> Markup {
    html! {
        div class="grid grid-cols-1 sm:grid-cols-3 gap-4 w-full mb-4" {
            @for shortcut in RangeShortcut::ALL {
                button
                    type="button"
                    hx-post=(format_endpoint(endpoints::SHORTCUT_SELECTION, shortcut.id()))
                    hx-target=(target)
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    class={ (CARD_STYLE) " cursor-pointer hover:bg-blue-50 dark:hover:bg-gray-700" }
                {
                    span class={ "block " (CARD_CAPTION_STYLE) } { (shortcut.caption()) }
                    span class="block text-lg font-bold text-gray-900 dark:text-white" {
                        (shortcut.years().start()) " - " (shortcut.years().end())
                    }
                }
            }
        }
    }
}
