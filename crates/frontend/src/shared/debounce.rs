//! Debounce по заднему фронту поверх отменяемого таймера.
//!
//! [`Scheduler`] взводит одноразовый таймер и возвращает handle; drop handle
//! отменяет таймер, если тот ещё не сработал. [`Debouncer`] хранит не больше
//! одного handle, поэтому каждый новый вызов вытесняет предыдущий.
//!
//! ```rust,ignore
//! let mut debouncer = Debouncer::new(GlooScheduler, 300);
//! debouncer.call(move || log::debug!("сработал один раз после серии"));
//! ```

use gloo_timers::callback::Timeout;

/// Источник одноразовых таймеров
pub trait Scheduler {
    /// Drop handle отменяет отложенное действие
    type Handle: 'static;

    fn schedule<F>(&self, delay_ms: u32, action: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}

/// Таймеры браузера (`setTimeout`/`clearTimeout`)
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule<F>(&self, delay_ms: u32, action: F) -> Self::Handle
    where
        F: FnOnce() + 'static,
    {
        Timeout::new(delay_ms, action)
    }
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    /// Взводит `action` на запуск после паузы, отменяя ранее взведённое
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + 'static,
    {
        // Старый handle сбрасываем до взвода: двух таймеров сразу не бывает
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(self.delay_ms, action));
    }

    /// Отменяет отложенное действие, если оно есть
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Планировщик с виртуальными часами для детерминированных тестов

    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    struct Task {
        id: u64,
        due_ms: u64,
        action: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now_ms: u64,
        next_id: u64,
        tasks: Vec<Task>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        id: u64,
        clock: Weak<RefCell<Clock>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().tasks.retain(|t| t.id != self.id);
            }
        }
    }

    impl ManualScheduler {
        pub fn now_ms(&self) -> u64 {
            self.clock.borrow().now_ms
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }

        /// Сдвигает часы вперёд и запускает созревшие задачи по порядку сроков
        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now_ms + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due_ms <= target)
                        .min_by_key(|(_, t)| (t.due_ms, t.id))
                        .map(|(i, _)| i);
                    match due {
                        Some(i) => {
                            let task = clock.tasks.remove(i);
                            clock.now_ms = task.due_ms;
                            Some(task.action)
                        }
                        None => {
                            clock.now_ms = target;
                            None
                        }
                    }
                };
                match next {
                    // Вне borrow: действие может снова что-то запланировать
                    Some(action) => action(),
                    None => break,
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule<F>(&self, delay_ms: u32, action: F) -> Self::Handle
        where
            F: FnOnce() + 'static,
        {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due_ms = clock.now_ms + u64::from(delay_ms);
            clock.tasks.push(Task {
                id,
                due_ms,
                action: Box::new(action),
            });
            ManualHandle {
                id,
                clock: Rc::downgrade(&self.clock),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Box<dyn FnOnce()>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = fired.clone();
        let make = move |value: &str| {
            let sink = sink.clone();
            let value = value.to_string();
            Box::new(move || sink.borrow_mut().push(value)) as Box<dyn FnOnce()>
        };
        (fired, make)
    }

    #[test]
    fn test_burst_fires_once_with_last_value() {
        let clock = ManualScheduler::default();
        let mut debouncer = Debouncer::new(clock.clone(), 300);
        let (fired, make) = recorder();

        debouncer.call(make("a"));
        clock.advance(100);
        debouncer.call(make("ab"));
        clock.advance(100);
        debouncer.call(make("abc"));
        assert_eq!(clock.pending(), 1);

        clock.advance(299);
        assert!(fired.borrow().is_empty());

        clock.advance(1);
        assert_eq!(*fired.borrow(), vec!["abc".to_string()]);
        assert_eq!(clock.now_ms(), 500);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let clock = ManualScheduler::default();
        let mut debouncer = Debouncer::new(clock.clone(), 300);
        let (fired, make) = recorder();

        debouncer.call(make("x"));
        clock.advance(400);
        debouncer.call(make("y"));
        clock.advance(400);

        assert_eq!(*fired.borrow(), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_cancel_and_drop_disarm_the_timer() {
        let clock = ManualScheduler::default();
        let (fired, make) = recorder();

        let mut debouncer = Debouncer::new(clock.clone(), 300);
        debouncer.call(make("cancelled"));
        debouncer.cancel();
        clock.advance(1_000);

        {
            let mut dropped = Debouncer::new(clock.clone(), 300);
            dropped.call(make("dropped"));
        }
        clock.advance(1_000);

        assert!(fired.borrow().is_empty());
        assert_eq!(clock.pending(), 0);
    }
}
