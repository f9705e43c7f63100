//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Date"
//!     indicator=Signal::derive(move || state.with(|s| s.sort_indicator_for(SortKey::Date)))
//!     on_sort=Callback::new(move |_| state.update(|s| s.toggle_sort(SortKey::Date)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, SortIndicator};
use leptos::prelude::*;
use thaw::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Автоматически:
/// - Добавляет индикатор сортировки (↑↓) для активной колонки
/// - Обрабатывает клики для изменения сортировки
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Индикатор сортировки для этой колонки
    #[prop(into)]
    indicator: Signal<SortIndicator>,

    /// Callback при клике на заголовок
    on_sort: Callback<()>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class=move || get_sort_class(indicator.get())>
                    {move || indicator.get().glyph()}
                </span>
            </div>
        </TableHeaderCell>
    }
}
