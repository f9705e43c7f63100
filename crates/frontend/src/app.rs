use crate::domain::a001_orders::ui::list::OrdersList;
use crate::shared::theme::{ThemeProvider, ThemeToggle};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <div class="app-shell">
                <header class="top-header">
                    <h1 class="top-header__title">"Order List"</h1>
                    <div class="top-header__actions">
                        <ThemeToggle />
                    </div>
                </header>
                <main class="app-main">
                    <OrdersList />
                </main>
            </div>
        </ThemeProvider>
    }
}
