//! Компонент чекбокса в заголовке таблицы для выбора всех видимых строк
//!
//! # Примеры
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     checked=select_all_checked
//!     enabled=Signal::derive(move || page_view.with(|v| v.select_all_enabled))
//!     on_toggle=Callback::new(move |_| toggle_all())
//! />
//! ```

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Компонент чекбокса в заголовке таблицы
///
/// Отмечен, только если все строки текущей страницы выбраны.
/// Что именно выбирать или снимать, решает владелец состояния.
#[component]
pub fn TableHeaderCheckbox(
    /// Все видимые строки выбраны
    #[prop(into)]
    checked: Signal<bool>,

    /// Есть ли что выбирать (на пустой странице чекбокс отключён)
    #[prop(into)]
    enabled: Signal<bool>,

    /// Callback при клике
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <label class=move || {
                if enabled.get() {
                    "custom-checkbox"
                } else {
                    "custom-checkbox custom-checkbox--disabled"
                }
            }>
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=move || checked.get()
                    prop:disabled=move || !enabled.get()
                    on:change=move |_| on_toggle.run(())
                />
                <span class="custom-checkbox__box">
                    {move || checked.get().then(|| icon("check"))}
                </span>
            </label>
        </TableHeaderCell>
    }
}
