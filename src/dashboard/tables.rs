//! Table view listing every observation in the dataset.

use maud::{Markup, html};

use crate::{
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
    ipc::{Series, format_index_value, format_month_label, format_yoy_change},
};

/// Renders a table with one row per observation, oldest first.
pub(super) fn observations_table(series: &Series) -> Markup {
    html! {
        div class="w-full overflow-x-auto rounded-lg shadow-md" {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                thead class=(TABLE_HEADER_STYLE) {
                    tr {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Month" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Index" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Annual change" }
                    }
                }

                tbody {
                    @for point in series.points() {
                        tr class=(TABLE_ROW_STYLE) {
                            th
                                scope="row"
                                class={
                                    (TABLE_CELL_STYLE)
                                    " font-medium text-gray-900 dark:text-white whitespace-nowrap"
                                }
                            {
                                (format_month_label(point.month))
                            }
                            td class=(TABLE_CELL_STYLE) { (format_index_value(point.index_value)) }
                            td class=(TABLE_CELL_STYLE) { (format_yoy_change(point.yoy_change)) }
                        }
                    }
                }
            }
        }
    }
}
