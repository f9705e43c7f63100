//! Поиск с debounce: текст в поле обновляется сразу, а фильтр после паузы.

use super::state::OrdersListState;
use crate::shared::debounce::{Debouncer, Scheduler};
use leptos::prelude::*;

/// Куда пишет поиск. Реализация должна молча игнорировать `apply_search`,
/// если владелец состояния уже уничтожен.
pub trait SearchSink: Clone + 'static {
    fn set_search_input(&self, raw: &str);
    fn apply_search(&self, term: String);
}

impl SearchSink for RwSignal<OrdersListState> {
    fn set_search_input(&self, raw: &str) {
        self.update(|s| s.set_search_input(raw));
    }

    fn apply_search(&self, term: String) {
        if self.try_update(|s| s.apply_search(term)).is_none() {
            log::debug!("orders: search debounce fired after unmount, ignored");
        }
    }
}

pub struct SearchDebounce<S: Scheduler> {
    debouncer: Debouncer<S>,
}

impl<S: Scheduler> SearchDebounce<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            debouncer: Debouncer::new(scheduler, delay_ms),
        }
    }

    /// Сохраняет сырой текст и перезапускает таймер применения поиска
    pub fn on_search_input<K: SearchSink>(&mut self, raw: String, sink: &K) {
        sink.set_search_input(&raw);
        let sink = sink.clone();
        self.debouncer.call(move || sink.apply_search(raw));
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}
