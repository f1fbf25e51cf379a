//! The interactive session.
//!
//! `Session` wires the factory, scoreboard, board and timeline together
//! and implements the user-facing actions. Every action runs to
//! completion inside one `&mut self` call; anything cosmetic that should
//! happen later goes on the timeline as a `VisualTask`.
//!
//! Hosts that share a session across threads wrap it in a mutex. Nothing
//! inside assumes more than one caller.

use tracing::{debug, info};

use super::theme::Theme;
use crate::cards::{CardFactory, TemplateRegistry};
use crate::core::{CardError, CardRng, SessionConfig};
use crate::display::{Board, CardClass, ElementId, LoadingModal};
use crate::input::Command;
use crate::scoring::Scoreboard;
use crate::timing::{Millis, Timeline};

/// Deferred cosmetic work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisualTask {
    /// Fade an element in to its resting position.
    FadeIn(ElementId),
    /// Apply the loading modal's `show` class.
    ShowModal,
    /// Finish a "create card" request: generate, attach, fade in.
    RevealCard,
    /// Hide the loading modal after its fade.
    HideModal,
    /// End a temporary animation class.
    RemoveClass(ElementId, CardClass),
    /// Return the score readout to normal size.
    SettleScore,
    /// Start one element's bounce.
    Bounce(ElementId),
    /// Slide one element out during a reset.
    SlideOut(ElementId),
    /// Clear the board, zero score and ids, repopulate.
    FinishReset,
}

/// One running card board.
///
/// ## Example
///
/// ```
/// use magic_cards::core::{SessionConfig, TimingConfig};
/// use magic_cards::session::Session;
///
/// let config = SessionConfig::new(42).with_timing(TimingConfig::instant());
/// let mut session = Session::new(config).unwrap();
/// session.initialize();
/// session.run_until_idle();
///
/// let (first, _) = session.board().elements().next().unwrap();
/// let delta = session.click(first).unwrap();
/// assert_eq!(session.score(), delta);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    factory: CardFactory,
    scoreboard: Scoreboard,
    board: Board,
    timeline: Timeline<VisualTask>,
    theme: Theme,
}

impl Session {
    /// Session with the built-in templates.
    pub fn new(config: SessionConfig) -> Result<Self, CardError> {
        Self::with_registry(config, TemplateRegistry::builtin())
    }

    /// Session drawing from a custom template set.
    pub fn with_registry(config: SessionConfig, registry: TemplateRegistry) -> Result<Self, CardError> {
        config.validate()?;

        let factory = CardFactory::new(registry, CardRng::new(config.seed));
        let scoreboard = Scoreboard::with_multiplier(config.interaction_multiplier)?;

        Ok(Self {
            config,
            factory,
            scoreboard,
            board: Board::new(),
            timeline: Timeline::new(),
            theme: Theme::default(),
        })
    }

    // === Actions ===

    /// Put the initial cards on the board and show the score.
    pub fn initialize(&mut self) {
        self.populate();
        self.refresh_score();
    }

    /// Request a new card. It appears after the loading delay.
    pub fn create_random_card(&mut self) {
        let timing = &self.config.timing;

        self.board.set_modal(LoadingModal::Displayed);
        self.timeline.schedule(timing.modal_show_delay_ms, VisualTask::ShowModal);
        self.timeline.schedule(timing.loading_ms, VisualTask::RevealCard);
    }

    /// Score a click on `element`.
    ///
    /// Returns the delta, or `None` if the element is not on the board.
    pub fn click(&mut self, element: ElementId) -> Option<i64> {
        let card = self.board.card_for(element)?.clone();

        let delta = self.scoreboard.apply_interaction(&card);
        self.refresh_score();

        if let Some(target) = self.board.find_by_card(card.id) {
            let pulse_ms = self.config.timing.pulse_ms;
            self.add_temporary_class(target, CardClass::AnimatePulse, pulse_ms);
        }

        Some(delta)
    }

    /// Bounce every card on the board, one after another.
    pub fn animate_all(&mut self) {
        let stagger = self.config.timing.bounce_stagger_ms;
        let order = self.board.order();

        self.timeline
            .schedule_staggered(0, stagger, order.iter().map(|&el| VisualTask::Bounce(el)));
    }

    /// Switch between dark and light. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        info!(theme = %self.theme, "theme toggled");
        self.theme
    }

    /// Slide every card out, then clear the board, zero the score and ids,
    /// and put a fresh set of initial cards down.
    pub fn reset(&mut self) {
        let timing = &self.config.timing;
        let order = self.board.order();
        let count = order.len() as Millis;

        self.timeline
            .schedule_staggered(0, timing.exit_stagger_ms, order.iter().map(|&el| VisualTask::SlideOut(el)));
        self.timeline.schedule(
            count
                .saturating_mul(timing.exit_stagger_ms)
                .saturating_add(timing.reset_settle_ms),
            VisualTask::FinishReset,
        );

        info!(cards = count, "reset requested");
    }

    /// Zero the score and restart card ids at 1, right now. Cards already
    /// on the board stay.
    pub fn reset_score(&mut self) {
        self.scoreboard.reset();
        self.factory.reset_ids();
        self.refresh_score();
    }

    /// Pointer entered an element. Returns whether it was a card.
    pub fn hover(&self, element: ElementId) -> bool {
        let is_card = self
            .board
            .element(element)
            .is_some_and(|el| el.has_class(CardClass::MagicCard));

        if is_card {
            debug!(%element, "card hover cue");
        }
        is_card
    }

    /// Handle a key press. Unbound keys are ignored.
    pub fn handle_key(&mut self, key: char) -> Option<Command> {
        let command = Command::from_key(key)?;
        self.dispatch(command);
        Some(command)
    }

    /// Run a command.
    pub fn dispatch(&mut self, command: Command) {
        debug!(?command, "dispatch");
        match command {
            Command::GenerateOne => self.create_random_card(),
            Command::AnimateAll => self.animate_all(),
            Command::ToggleTheme => {
                self.toggle_theme();
            }
            Command::ResetAll => self.reset(),
        }
    }

    // === Time ===

    /// Run every task due at or before `now`, in order.
    ///
    /// The clock steps through each due time, so follow-up tasks keep
    /// their delays relative to the task that scheduled them. Returns the
    /// number of tasks run.
    pub fn tick(&mut self, now: Millis) -> usize {
        let mut ran = 0;

        while let Some(due) = self.timeline.next_due().filter(|&d| d <= now) {
            for scheduled in self.timeline.advance_to(due) {
                self.run(scheduled.task);
                ran += 1;
            }
        }
        self.timeline.advance_to(now);

        ran
    }

    /// Advance the clock by `delta` ms.
    pub fn advance_by(&mut self, delta: Millis) -> usize {
        self.tick(self.timeline.now().saturating_add(delta))
    }

    /// Run tasks until none are pending. Returns the final clock.
    pub fn run_until_idle(&mut self) -> Millis {
        while let Some(due) = self.timeline.next_due() {
            self.tick(due);
        }
        self.timeline.now()
    }

    // === Accessors ===

    #[must_use]
    pub fn score(&self) -> i64 {
        self.scoreboard.total()
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn factory(&self) -> &CardFactory {
        &self.factory
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn now(&self) -> Millis {
        self.timeline.now()
    }

    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.timeline.pending()
    }

    // === Internals ===

    fn populate(&mut self) {
        let stagger = self.config.timing.initial_stagger_ms;
        for i in 0..self.config.initial_cards {
            let element = self.attach_new_card();
            self.timeline
                .schedule((i as Millis).saturating_mul(stagger), VisualTask::FadeIn(element));
        }
    }

    /// Generate a card and attach it ready for its entrance.
    fn attach_new_card(&mut self) -> ElementId {
        let card = self.factory.generate_card();
        let element = self.board.attach(card);
        if let Some(el) = self.board.element_mut(element) {
            el.prepare_entrance();
        }
        element
    }

    fn refresh_score(&mut self) {
        self.board.refresh_score(self.scoreboard.total());
        self.timeline
            .schedule(self.config.timing.score_highlight_ms, VisualTask::SettleScore);
    }

    fn add_temporary_class(&mut self, element: ElementId, class: CardClass, duration: Millis) {
        if let Some(el) = self.board.element_mut(element) {
            el.add_class(class);
            self.timeline.schedule(duration, VisualTask::RemoveClass(element, class));
        }
    }

    fn run(&mut self, task: VisualTask) {
        debug!(?task, now = self.timeline.now(), "visual task");
        let timing = &self.config.timing;

        match task {
            VisualTask::FadeIn(element) => {
                if let Some(el) = self.board.element_mut(element) {
                    el.fade_in(timing.fade_transition_ms);
                }
            }
            VisualTask::ShowModal => self.board.set_modal(LoadingModal::Shown),
            VisualTask::RevealCard => {
                let fade_in_delay = timing.fade_in_delay_ms;
                let modal_fade = timing.modal_fade_ms;

                let element = self.attach_new_card();
                self.timeline.schedule(fade_in_delay, VisualTask::FadeIn(element));

                self.board.set_modal(LoadingModal::FadingOut);
                self.timeline.schedule(modal_fade, VisualTask::HideModal);
            }
            VisualTask::HideModal => self.board.set_modal(LoadingModal::Hidden),
            VisualTask::RemoveClass(element, class) => {
                if let Some(el) = self.board.element_mut(element) {
                    el.remove_class(class);
                }
            }
            VisualTask::SettleScore => self.board.settle_score(),
            VisualTask::Bounce(element) => {
                let bounce_ms = timing.bounce_ms;
                self.add_temporary_class(element, CardClass::AnimateBounce, bounce_ms);
            }
            VisualTask::SlideOut(element) => {
                if let Some(el) = self.board.element_mut(element) {
                    el.slide_out(timing.exit_transition_ms);
                }
            }
            VisualTask::FinishReset => {
                self.board.clear();
                self.scoreboard.reset();
                self.factory.reset_ids();
                self.refresh_score();
                self.populate();
                info!("board reset");
            }
        }
    }
}
