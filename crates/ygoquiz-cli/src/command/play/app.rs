use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, HorizontalAlignment, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Padding, Paragraph, Wrap},
};
use ygoquiz_engine::{
    CardSource, Challenge, Feedback, GameMode, InputKind, Phase, RoundToken, Session, SessionError,
};

use super::{
    action::{Action, View},
    dealing::DealManager,
};
use crate::{
    tui::App,
    view::{KeyBindingDisplay, ModeMenu, RoundDisplay, ScoreDisplay, style},
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// The quiz: one [`Session`] plus the UI state around it.
pub(super) struct QuizApp<S> {
    session: Session,
    deals: DealManager<S>,
    menu_cursor: usize,
    option_cursor: usize,
    input: String,
    spinner: usize,
    is_exiting: bool,
}

impl<S> QuizApp<S>
where
    S: CardSource + Send + Sync + 'static,
{
    /// Creates the app on the mode menu, or straight in `mode` if given.
    pub(super) fn new(deals: DealManager<S>, mode: Option<GameMode>) -> Self {
        let mut app = Self {
            session: Session::new(),
            deals,
            menu_cursor: 0,
            option_cursor: 0,
            input: String::new(),
            spinner: 0,
            is_exiting: false,
        };
        if let Some(mode) = mode {
            app.menu_cursor = GameMode::ALL.iter().position(|m| *m == mode).unwrap_or(0);
            app.start(mode);
        }
        app
    }

    fn start(&mut self, mode: GameMode) {
        let token = self.session.select_mode(mode);
        self.request(token);
    }

    fn next_round(&mut self) {
        match self.session.next_round() {
            Ok(token) => self.request(token),
            Err(e) => log::warn!("cannot start next round: {e}"),
        }
    }

    fn request(&mut self, token: RoundToken) {
        self.input.clear();
        self.option_cursor = 0;
        if let Some(mode) = self.session.mode() {
            self.deals.start(mode, token);
        }
    }

    fn answer<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Session) -> Result<Feedback, SessionError>,
    {
        match f(&mut self.session) {
            Ok(feedback) => log::debug!("answered: {}", feedback.message),
            Err(e) => log::warn!("input ignored: {e}"),
        }
    }

    fn option_count(&self) -> usize {
        self.session
            .round()
            .map_or(0, |round| match round.challenge() {
                Challenge::MultipleChoice { options } => options.len(),
                _ => 0,
            })
    }

    fn apply(&mut self, view: View, action: Action) {
        match (view, action) {
            (_, Action::Quit) => self.is_exiting = true,
            (_, Action::Menu) => {
                self.session.return_to_menu();
                self.input.clear();
            }
            (View::Menu, Action::Up) => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            (View::Menu, Action::Down) => {
                self.menu_cursor = (self.menu_cursor + 1).min(GameMode::ALL.len() - 1);
            }
            (View::Menu, Action::Confirm) => self.start(GameMode::ALL[self.menu_cursor]),
            (View::Menu, Action::Choose(index)) => {
                if let Some(mode) = GameMode::ALL.get(index).copied() {
                    self.menu_cursor = index;
                    self.start(mode);
                }
            }
            (View::Answering(InputKind::MultipleChoice), Action::Up) => {
                self.option_cursor = self.option_cursor.saturating_sub(1);
            }
            (View::Answering(InputKind::MultipleChoice), Action::Down) => {
                let last = self.option_count().saturating_sub(1);
                self.option_cursor = (self.option_cursor + 1).min(last);
            }
            (View::Answering(InputKind::MultipleChoice), Action::Confirm) => {
                let index = self.option_cursor;
                self.answer(|session| session.choose_option(index));
            }
            (View::Answering(InputKind::MultipleChoice), Action::Choose(index)) => {
                self.answer(|session| session.choose_option(index));
            }
            (View::Answering(InputKind::FreeText), Action::Confirm) => {
                let input = std::mem::take(&mut self.input);
                self.answer(|session| session.submit_text(&input));
            }
            (View::Answering(InputKind::FreeText), Action::Type(c)) => self.input.push(c),
            (View::Answering(InputKind::FreeText), Action::Erase) => _ = self.input.pop(),
            (View::Answering(InputKind::PickCard), Action::Pick(side)) => {
                self.answer(|session| session.pick_card(side));
            }
            (View::Resolved, Action::NextRound) => self.next_round(),
            (view, action) => log::debug!("{action:?} does nothing in {view:?}"),
        }
    }

    fn draw_body(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().padding(Padding::symmetric(2, 1));
        let block = match self.session.mode() {
            Some(mode) => block.title(format!(" {mode} ")),
            None => block,
        };

        match self.session.phase() {
            Phase::Idle => {
                frame.render_widget(ModeMenu::new(self.menu_cursor).block(block), area);
            }
            Phase::Dealing { .. } => {
                let text = format!("{} Loading card...", SPINNER[self.spinner % SPINNER.len()]);
                frame.render_widget(Paragraph::new(text).block(block), area);
            }
            Phase::AwaitingInput { round } => {
                let display = RoundDisplay::new(round)
                    .input(&self.input)
                    .cursor(self.option_cursor)
                    .block(block);
                frame.render_widget(display, area);
            }
            Phase::Resolved {
                round: Some(round),
                feedback,
            } => {
                frame.render_widget(RoundDisplay::new(round).feedback(feedback).block(block), area);
            }
            Phase::Resolved {
                round: None,
                feedback,
            } => {
                let text = Text::from(Line::styled(
                    feedback.message.as_str(),
                    style::tone(feedback.tone),
                ));
                frame.render_widget(
                    Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
                    area,
                );
            }
        }
    }
}

impl<S> App for QuizApp<S>
where
    S: CardSource + Send + Sync + 'static,
{
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let view = View::of(&self.session);
        if let Some(action) = Action::from_key_event(view, &key) {
            self.apply(view, action);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let viewport = frame
            .area()
            .centered(Constraint::Max(100), Constraint::Max(40));
        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(viewport);

        let header = ScoreDisplay::new(self.session.score()).block(
            Block::bordered()
                .title(" Yu-Gi-Oh! Card Quiz ")
                .title_alignment(HorizontalAlignment::Center)
                .padding(Padding::horizontal(1)),
        );
        let footer =
            KeyBindingDisplay::new(Action::bindings(View::of(&self.session))).block(Block::bordered());

        frame.render_widget(header, header_area);
        self.draw_body(frame, body_area);
        frame.render_widget(footer, footer_area);
    }

    fn update(&mut self) -> bool {
        let mut changed = false;
        for (token, dealt) in self.deals.poll_results() {
            if self.session.deliver(token, dealt).is_applied() {
                self.option_cursor = 0;
                changed = true;
            }
        }
        if self.session.phase().is_dealing() {
            self.spinner = self.spinner.wrapping_add(1);
            changed = true;
        }
        changed
    }
}
