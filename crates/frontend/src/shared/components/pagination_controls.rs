use leptos::prelude::*;

/// PaginationControls component - prev/next arrows and a button per page
///
/// Pages are 1-based. Arrows are disabled at the bounds; the owner still
/// validates the requested page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (0 when the list is empty)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when a page number is clicked
    on_page_change: Callback<usize>,

    /// Callback for the ← arrow
    on_prev: Callback<()>,

    /// Callback for the → arrow
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn pagination-btn--nav"
                on:click=move |_| on_prev.run(())
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                "←"
            </button>
            {move || {
                (1..=total_pages.get())
                    .map(|page| {
                        view! {
                            <button
                                class=move || {
                                    if current_page.get() == page {
                                        "pagination-btn pagination-btn--number active"
                                    } else {
                                        "pagination-btn pagination-btn--number"
                                    }
                                }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn pagination-btn--nav"
                on:click=move |_| on_next.run(())
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                "→"
            </button>
        </div>
    }
}
