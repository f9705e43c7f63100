pub mod query;
pub mod search;
pub mod selection;
pub mod state;

use self::query::{SortKey, SortSpec};
use self::search::SearchDebounce;
use self::state::{create_state, OrderRow, ToolbarMenu};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::config::default_config;
use crate::shared::debounce::GlooScheduler;
use crate::shared::icons::{icon, themed_icon, ToolbarIcon};
use crate::shared::list_utils::{SearchInput, SortDirection};
use crate::shared::theme::use_theme;
use contracts::domain::a001_order::{sample_orders, Order};
use contracts::enums::StatusFilter;
use leptos::prelude::*;
use thaw::*;

const TABLE_ID: &str = "a001-orders-table";

fn status_dot_class(filter: StatusFilter) -> String {
    match filter {
        StatusFilter::All => "status-dot status-all".to_string(),
        StatusFilter::Only(status) => format!("status-dot {}", status.css_class()),
    }
}

#[component]
pub fn OrdersList() -> impl IntoView {
    let config = default_config().orders_table;
    let page_size = config.page_size;
    let state = create_state(page_size);
    let theme = use_theme();
    let records: &'static [Order] = sample_orders();

    // filter → sort: пересчёт только при смене (поиск, статус, сортировка)
    let criteria = Memo::new(move |_| state.with(|s| s.criteria()));
    let sorted = Memo::new(move |_| criteria.with(|c| c.apply(records)));

    // paginate + флаги строк: пересчёт при смене списка, страницы, выбора или hover
    let page_view = Memo::new(move |_| sorted.with(|rows| state.with(|s| s.page_of(rows))));
    let page = Memo::new(move |_| page_view.with(|v| v.current_page));
    let page_count = Memo::new(move |_| page_view.with(|v| v.total_pages));
    // For перерисовывает строки только при смене набора заказов на странице
    let visible = Memo::new(move |_| page_view.with(|v| v.orders()));
    let select_all_checked = Signal::derive(move || page_view.with(|v| v.select_all_checked));
    let select_all_enabled = Signal::derive(move || page_view.with(|v| v.select_all_enabled));
    let row_flag = move |id: &str, flag: fn(&OrderRow<'_>) -> bool| {
        page_view.with(|v| v.row(id).is_some_and(flag))
    };

    // Поиск с debounce
    let search = StoredValue::new_local(SearchDebounce::new(
        GlooScheduler,
        config.search_debounce_ms,
    ));
    let on_search = Callback::new(move |raw: String| {
        search.update_value(|d| d.on_search_input(raw, &state));
    });
    on_cleanup(move || {
        search.try_update_value(|d| d.cancel());
    });

    let go_to_page = Callback::new(move |target: usize| {
        let total = page_count.get_untracked();
        state.update(|s| {
            s.go_to_page(target, total);
        });
    });
    let prev_page = Callback::new(move |_: ()| {
        let total = page_count.get_untracked();
        state.update(|s| {
            s.prev_page(total);
        });
    });
    let next_page = Callback::new(move |_: ()| {
        let total = page_count.get_untracked();
        state.update(|s| {
            s.next_page(total);
        });
    });

    let toggle_all = Callback::new(move |_: ()| {
        let ids = page_view.with_untracked(|v| v.visible_ids());
        state.update(|s| s.toggle_select_all(&ids));
    });

    let menu_button_class = move |menu: ToolbarMenu| {
        if state.with(|s| s.open_menu == menu) {
            "action-button active"
        } else {
            "action-button"
        }
    };

    view! {
        <div class="orders-table">
            <div class="orders-table__header">
                <div class="orders-table__left-actions">
                    <div class="dropdown">
                        <button
                            class=move || menu_button_class(ToolbarMenu::Filter)
                            on:click=move |_| state.update(|s| s.toggle_menu(ToolbarMenu::Filter))
                        >
                            <img
                                src=move || themed_icon(ToolbarIcon::Filter, theme.get_theme())
                                alt="Filter"
                                class="icon"
                            />
                        </button>
                        <Show when=move || state.with(|s| s.open_menu == ToolbarMenu::Filter)>
                            <div class="dropdown__menu">
                                <div class="dropdown__header">"Filter by Status"</div>
                                {StatusFilter::options()
                                    .into_iter()
                                    .map(|option| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if state.with(|s| s.active_status_filter() == option) {
                                                        "dropdown__item active"
                                                    } else {
                                                        "dropdown__item"
                                                    }
                                                }
                                                on:click=move |_| state.update(|s| s.set_status_filter(option))
                                            >
                                                <span class=status_dot_class(option)></span>
                                                {option.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>

                    <div class="dropdown">
                        <button
                            class=move || menu_button_class(ToolbarMenu::Sort)
                            on:click=move |_| state.update(|s| s.toggle_menu(ToolbarMenu::Sort))
                        >
                            <img
                                src=move || themed_icon(ToolbarIcon::Sort, theme.get_theme())
                                alt="Sort"
                                class="icon"
                            />
                        </button>
                        <Show when=move || state.with(|s| s.open_menu == ToolbarMenu::Sort)>
                            <div class="dropdown__menu">
                                <div class="dropdown__header">"Sort by"</div>
                                {SortKey::all()
                                    .into_iter()
                                    .map(|key| {
                                        let option = move |direction: SortDirection| {
                                            let option_sort = SortSpec {
                                                key: Some(key),
                                                direction,
                                            };
                                            view! {
                                                <button
                                                    class=move || {
                                                        if state.with(|s| s.sort == option_sort) {
                                                            "dropdown__item active"
                                                        } else {
                                                            "dropdown__item"
                                                        }
                                                    }
                                                    value=key.code()
                                                    on:click=move |ev| {
                                                        let code = event_target::<web_sys::HtmlButtonElement>(&ev).value();
                                                        state.update(|s| s.set_sort_by_name(&code, direction));
                                                    }
                                                >
                                                    {format!("{} {}", key.label(), direction.arrow())}
                                                </button>
                                            }
                                        };
                                        view! {
                                            <div class="dropdown__sort-group">
                                                {option(SortDirection::Asc)}
                                                {option(SortDirection::Desc)}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>
                </div>

                <div class="orders-table__right-actions">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search_input_value().to_string()))
                        on_change=on_search
                        icon_src=Signal::derive(move || themed_icon(ToolbarIcon::Search, theme.get_theme()))
                        placeholder="Search"
                    />
                </div>
            </div>

            <div class="table-wrapper">
                <Table attr:id=TABLE_ID attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                checked=select_all_checked
                                enabled=select_all_enabled
                                on_toggle=toggle_all
                            />
                            {SortKey::all()
                                .into_iter()
                                .map(|key| {
                                    view! {
                                        <SortableHeaderCell
                                            label=key.column_title()
                                            indicator=Signal::derive(move || state.with(|s| s.sort_indicator_for(key)))
                                            on_sort=Callback::new(move |_: ()| state.update(|s| s.toggle_sort(key)))
                                        />
                                    }
                                })
                                .collect_view()}
                            <TableHeaderCell resizable=false class="table__actions-column">
                                ""
                            </TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|order| order.id.clone()
                            children=move |order: &'static Order| {
                                let id = order.id.clone();
                                let id_enter = id.clone();
                                let id_checked = id.clone();
                                let id_visible = id.clone();
                                let status_class = format!("status {}", order.status.css_class());

                                view! {
                                    <TableRow
                                        on:mouseenter=move |_| state.update(|s| s.hover_enter(&id_enter))
                                        on:mouseleave=move |_| state.update(|s| s.hover_leave())
                                    >
                                        <TableCellCheckbox
                                            item_id=id
                                            checked=Signal::derive(move || row_flag(&id_checked, |r| r.is_selected))
                                            visible=Signal::derive(move || row_flag(&id_visible, |r| r.show_checkbox))
                                            on_toggle=Callback::new(move |row_id: String| state.update(|s| s.toggle_row(&row_id)))
                                        />

                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="order-id">{order.id.as_str()}</span>
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <div class="user-info">
                                                    <img
                                                        src=order.user.avatar.asset_path()
                                                        alt=order.user.name.as_str()
                                                        class="avatar"
                                                    />
                                                    <span class="user-name">{order.user.name.as_str()}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {order.project.as_str()}
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {order.address.as_str()}
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="date">{order.display_date.as_str()}</span>
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=status_class>{order.status.display_name()}</span>
                                            </TableCellLayout>
                                        </TableCell>

                                        <TableCell>
                                            <button class="more-button" title="More">
                                                {icon("more-horizontal")}
                                            </button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                current_page=page
                total_pages=page_count
                on_page_change=go_to_page
                on_prev=prev_page
                on_next=next_page
            />

            <Show when=move || state.with(|s| s.open_menu != ToolbarMenu::Closed)>
                <div class="overlay" on:click=move |_| state.update(|s| s.close_menus())></div>
            </Show>
        </div>
    }
}
