use std::cell::RefCell;
use std::rc::Rc;

use crate::error::RouletteError;
use crate::menu_catalog::{default_catalog, MenuCategory};
use crate::menu_roulette::{spin, SpinOutcome, SpinResult, WheelState};
use crate::random::RandomSource;
use crate::roulette_config::RouletteConfig;
use crate::validation::validate_catalog;

/// Runs a callback once after a delay. The browser client backs this with
/// `setTimeout`; tests fire callbacks by hand.
pub trait SpinTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingSpin {
    pub ticket: u64,
    pub completion_delay_ms: u32,
    pub outcome: SpinOutcome,
}

/// One wheel on screen: the category picker plus the wheel it drives.
#[derive(Debug, Clone)]
pub struct RouletteSession {
    categories: Vec<MenuCategory>,
    active: usize,
    state: WheelState,
    config: RouletteConfig,
    pending: Option<(u64, SpinResult)>,
    next_ticket: u64,
    wheel_generation: u64,
}

impl RouletteSession {
    pub fn new(categories: Vec<MenuCategory>, config: RouletteConfig) -> Result<Self, RouletteError> {
        validate_catalog(&categories)?;
        let config = config.validated()?;
        Ok(Self {
            categories,
            active: 0,
            state: WheelState::new(),
            config,
            pending: None,
            next_ticket: 1,
            wheel_generation: 0,
        })
    }

    pub fn with_config(config: RouletteConfig) -> Result<Self, RouletteError> {
        Self::new(default_catalog().to_vec(), config)
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_category(&self) -> &MenuCategory {
        &self.categories[self.active]
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn config(&self) -> &RouletteConfig {
        &self.config
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning
    }

    /// Bumped every time the wheel is swapped or rewound. Animations started
    /// under an older generation must stop painting.
    pub fn wheel_generation(&self) -> u64 {
        self.wheel_generation
    }

    /// Switches the wheel to another category and rewinds it to 0 degrees.
    /// Ignored while a spin is in flight.
    pub fn select_category(&mut self, index: usize) -> Result<(), RouletteError> {
        if self.state.is_spinning {
            log::warn!("category change to {} ignored while spinning", index);
            return Err(RouletteError::SpinInProgress);
        }
        if index >= self.categories.len() {
            return Err(RouletteError::UnknownCategory(index));
        }
        self.active = index;
        self.state.reset();
        self.wheel_generation += 1;
        log::debug!("category set to {}", self.categories[index].name);
        Ok(())
    }

    pub fn start_spin<S: RandomSource + ?Sized>(&mut self, rng: &mut S) -> Result<PendingSpin, RouletteError> {
        let outcome = match spin(&self.state, &self.categories[self.active], rng, &self.config) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("spin rejected: {}", e);
                return Err(e);
            }
        };

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.state = outcome.next_state.clone();
        self.pending = Some((ticket, outcome.result.clone()));

        Ok(PendingSpin {
            ticket,
            completion_delay_ms: outcome.completion_delay_ms,
            outcome,
        })
    }

    /// Settles the spin identified by `ticket`. Unknown or stale tickets are ignored.
    pub fn finish_spin(&mut self, ticket: u64) -> Option<SpinResult> {
        match self.pending.take() {
            Some((pending_ticket, result)) if pending_ticket == ticket => {
                self.state.complete_spin(result.clone());
                log::info!("🎡 roulette landed on {} ({})", result.selected_item, self.active_category().name);
                Some(result)
            }
            other => {
                self.pending = other;
                None
            }
        }
    }
}

impl Default for RouletteSession {
    fn default() -> Self {
        Self {
            categories: default_catalog().to_vec(),
            active: 0,
            state: WheelState::new(),
            config: RouletteConfig::default(),
            pending: None,
            next_ticket: 1,
            wheel_generation: 0,
        }
    }
}

/// Starts a spin and hands its completion to `timer`. `on_done` runs after the
/// session has gone back to idle. A session dropped before the timer fires is
/// left alone.
pub fn run_spin<S, T, F>(
    session: &Rc<RefCell<RouletteSession>>,
    rng: &mut S,
    timer: &T,
    on_done: F,
) -> Result<PendingSpin, RouletteError>
where
    S: RandomSource + ?Sized,
    T: SpinTimer + ?Sized,
    F: FnOnce(SpinResult) + 'static,
{
    let pending = session.borrow_mut().start_spin(rng)?;
    let ticket = pending.ticket;
    let weak = Rc::downgrade(session);

    timer.schedule(
        pending.completion_delay_ms,
        Box::new(move || {
            if let Some(session) = weak.upgrade() {
                let finished = session.borrow_mut().finish_spin(ticket);
                if let Some(result) = finished {
                    on_done(result);
                }
            }
        }),
    );

    Ok(pending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::test_support::ScriptedSource;

    #[derive(Default)]
    struct ManualTimer {
        queue: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    }

    impl SpinTimer for ManualTimer {
        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
            self.queue.borrow_mut().push((delay_ms, callback));
        }
    }

    impl ManualTimer {
        fn fire_all(&self) -> Vec<u32> {
            let jobs: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            jobs.into_iter()
                .map(|(delay, callback)| {
                    callback();
                    delay
                })
                .collect()
        }
    }

    fn session() -> Rc<RefCell<RouletteSession>> {
        Rc::new(RefCell::new(RouletteSession::with_config(RouletteConfig::default()).unwrap()))
    }

    #[test]
    fn test_timer_drives_spin_to_idle() {
        let session = session();
        let timer = ManualTimer::default();
        let landed = Rc::new(RefCell::new(None));
        let mut rng = ScriptedSource::new(&[0.26]);

        let sink = landed.clone();
        let pending = run_spin(&session, &mut rng, &timer, move |result| {
            *sink.borrow_mut() = Some(result);
        })
        .unwrap();

        assert_eq!(pending.outcome.result.selected_item, "비빔밥");
        assert!(session.borrow().is_spinning());
        assert!(landed.borrow().is_none());

        assert_eq!(timer.fire_all(), vec![4000]);
        let state = session.borrow().state().clone();
        assert!(!state.is_spinning);
        assert_eq!(state.current_rotation_degrees, 360.0 * 5.0 + 247.5);
        assert_eq!(state.last_result.as_ref().map(|r| r.selected_index), Some(2));
        assert_eq!(landed.borrow().as_ref().map(|r| r.selected_item.as_str()), Some("비빔밥"));
    }

    #[test]
    fn test_second_spin_rejected_until_timer_fires() {
        let session = session();
        let timer = ManualTimer::default();
        let mut rng = ScriptedSource::new(&[0.5, 0.1]);

        run_spin(&session, &mut rng, &timer, |_| {}).unwrap();
        let before = session.borrow().state().clone();
        let err = run_spin(&session, &mut rng, &timer, |_| {}).unwrap_err();

        assert!(matches!(err, RouletteError::ConcurrentSpinRejected));
        assert_eq!(session.borrow().state(), &before);
        assert_eq!(timer.fire_all().len(), 1);
        assert!(run_spin(&session, &mut rng, &timer, |_| {}).is_ok());
    }

    #[test]
    fn test_category_locked_while_spinning() {
        let session = session();
        let timer = ManualTimer::default();
        let mut rng = ScriptedSource::new(&[0.9]);

        run_spin(&session, &mut rng, &timer, |_| {}).unwrap();
        let err = session.borrow_mut().select_category(3).unwrap_err();
        assert!(matches!(err, RouletteError::SpinInProgress));
        assert_eq!(session.borrow().active_index(), 0);

        timer.fire_all();
        assert!(session.borrow().state().current_rotation_degrees > 0.0);
        session.borrow_mut().select_category(3).unwrap();
        let session = session.borrow();
        assert_eq!(session.active_category().name, "양식");
        assert_eq!(session.state(), &WheelState::new());
    }

    #[test]
    fn test_reselecting_same_category_resets_wheel() {
        let mut session = RouletteSession::with_config(RouletteConfig::default()).unwrap();
        let mut rng = ScriptedSource::new(&[0.3]);
        let pending = session.start_spin(&mut rng).unwrap();
        session.finish_spin(pending.ticket).unwrap();

        session.select_category(0).unwrap();
        assert_eq!(session.state().current_rotation_degrees, 0.0);
        assert!(session.state().last_result.is_none());
    }

    #[test]
    fn test_wheel_generation_tracks_resets_only() {
        let session = session();
        let timer = ManualTimer::default();
        let mut rng = ScriptedSource::new(&[0.4]);
        let start = session.borrow().wheel_generation();

        run_spin(&session, &mut rng, &timer, |_| {}).unwrap();
        assert!(session.borrow_mut().select_category(2).is_err());
        assert_eq!(session.borrow().wheel_generation(), start);

        timer.fire_all();
        assert_eq!(session.borrow().wheel_generation(), start);

        session.borrow_mut().select_category(2).unwrap();
        assert_eq!(session.borrow().wheel_generation(), start + 1);
        assert!(session.borrow_mut().select_category(99).is_err());
        assert_eq!(session.borrow().wheel_generation(), start + 1);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut session = RouletteSession::with_config(RouletteConfig::default()).unwrap();
        assert!(matches!(session.select_category(8), Err(RouletteError::UnknownCategory(8))));
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut session = RouletteSession::with_config(RouletteConfig::default()).unwrap();
        let mut rng = ScriptedSource::new(&[0.7]);
        let pending = session.start_spin(&mut rng).unwrap();

        assert!(session.finish_spin(pending.ticket + 1).is_none());
        assert!(session.is_spinning());
        assert!(session.finish_spin(pending.ticket).is_some());
        assert!(session.finish_spin(pending.ticket).is_none());
    }

    #[test]
    fn test_dropped_session_skips_completion() {
        let session = session();
        let timer = ManualTimer::default();
        let called = Rc::new(RefCell::new(false));
        let mut rng = ScriptedSource::new(&[0.1]);

        let flag = called.clone();
        run_spin(&session, &mut rng, &timer, move |_| *flag.borrow_mut() = true).unwrap();
        drop(session);
        timer.fire_all();
        assert!(!*called.borrow());
    }

    #[test]
    fn test_default_session_starts_idle() {
        let session = RouletteSession::default();
        assert_eq!(session.categories().len(), 8);
        assert_eq!(session.active_category().emoji, "🍚");
        assert_eq!(session.config(), &RouletteConfig::default());
        assert!(!session.is_spinning());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let empty = vec![MenuCategory::new("빈칸", "❔", Vec::new())];
        assert!(matches!(
            RouletteSession::new(empty, RouletteConfig::default()),
            Err(RouletteError::InvalidCatalog(_))
        ));

        let config = RouletteConfig { spin_duration_ms: 0, ..Default::default() };
        assert!(matches!(RouletteSession::with_config(config), Err(RouletteError::InvalidConfig(_))));
    }
}
