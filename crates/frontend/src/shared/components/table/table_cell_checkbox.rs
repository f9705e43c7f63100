//! Компонент чекбокса в ячейке таблицы для выбора отдельной строки
//!
//! # Примеры
//!
//! ```rust,ignore
//! <TableCellCheckbox
//!     item_id=row.id.clone()
//!     checked=Signal::derive(move || state.with(|s| s.selection.is_selected(&id)))
//!     visible=Signal::derive(move || state.with(|s| s.show_checkbox(&id)))
//!     on_toggle=Callback::new(move |id: String| state.update(|s| s.toggle_row(&id)))
//! />
//! ```

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Компонент чекбокса в ячейке таблицы
///
/// Автоматически:
/// - Скрывает чекбокс, пока строка не под курсором и не выбрана
/// - Останавливает propagation клика (чтобы не вызывать клик на строке)
/// - Вызывает callback с id строки при клике
#[component]
pub fn TableCellCheckbox(
    /// ID текущего элемента
    #[prop(into)]
    item_id: String,

    /// Выбрана ли строка
    #[prop(into)]
    checked: Signal<bool>,

    /// Показывать ли чекбокс
    #[prop(into)]
    visible: Signal<bool>,

    /// Callback при клике (item_id)
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <label class=move || {
                if visible.get() {
                    "custom-checkbox"
                } else {
                    "custom-checkbox custom-checkbox--hidden"
                }
            }>
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |_| on_toggle.run(item_id.clone())
                />
                <span class="custom-checkbox__box">
                    {move || checked.get().then(|| icon("check"))}
                </span>
            </label>
        </TableCell>
    }
}
