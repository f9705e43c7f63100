use crate::shared::theme::Theme;
use leptos::prelude::*;

/// Иконки панели инструментов таблицы. Для тёмной темы свой набор картинок.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarIcon {
    Search,
    Filter,
    Sort,
}

pub fn themed_icon(icon: ToolbarIcon, theme: Theme) -> &'static str {
    match (icon, theme) {
        (ToolbarIcon::Search, Theme::Light) => "/assets/icons/search.png",
        (ToolbarIcon::Filter, Theme::Light) => "/assets/icons/filter.png",
        (ToolbarIcon::Sort, Theme::Light) => "/assets/icons/sort.png",
        (ToolbarIcon::Search, Theme::Dark) => "/assets/darkIcons/search.png",
        (ToolbarIcon::Filter, Theme::Dark) => "/assets/darkIcons/filter.png",
        (ToolbarIcon::Sort, Theme::Dark) => "/assets/darkIcons/sort.png",
    }
}

pub fn icon(name: &str) -> AnyView {
    match name {
        "check" => view! {
            <svg width="12" height="12" viewBox="0 0 12 12" fill="none" aria-hidden="true">
                <path d="M10 3L4.5 8.5L2 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
            </svg>
        }.into_any(),
        "more-horizontal" => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <circle cx="12" cy="12" r="1"/>
                <circle cx="19" cy="12" r="1"/>
                <circle cx="5" cy="12" r="1"/>
            </svg>
        }.into_any(),
        _ => view! { <span></span> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_set_follows_theme() {
        assert_eq!(
            themed_icon(ToolbarIcon::Search, Theme::Light),
            "/assets/icons/search.png"
        );
        assert_eq!(
            themed_icon(ToolbarIcon::Search, Theme::Dark),
            "/assets/darkIcons/search.png"
        );
        for icon in [ToolbarIcon::Search, ToolbarIcon::Filter, ToolbarIcon::Sort] {
            let light = themed_icon(icon, Theme::Light);
            let dark = themed_icon(icon, Theme::Dark);
            assert_eq!(light.rsplit('/').next(), dark.rsplit('/').next());
        }
    }
}
