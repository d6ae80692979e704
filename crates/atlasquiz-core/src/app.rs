// crates/atlasquiz-core/src/app.rs

//! The surface a presentation layer talks to: one [`QuizSession`] plus a
//! shared, read-only [`Catalog`].

use crate::catalog::Catalog;
use crate::render::{render_plan_for, RenderPlan};
use crate::session::{DisplayState, Mode, QuizSession, RegionChoice};
use rand::Rng;
use std::sync::Arc;

/// One user's quiz. Create one per connection/window; clone the `Arc` to
/// share the catalog between them.
#[derive(Debug, Clone)]
pub struct QuizApp {
    catalog: Arc<Catalog>,
    session: QuizSession,
}

impl QuizApp {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            session: QuizSession::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn list_regions(&self) -> [RegionChoice; 6] {
        RegionChoice::list()
    }

    pub fn choose_mode(&mut self, mode: Mode) {
        self.session.choose_mode(mode);
    }

    pub fn choose_region(&mut self, choice: RegionChoice) {
        self.session.choose_region(&self.catalog, choice);
    }

    pub fn choose_region_with<R: Rng + ?Sized>(&mut self, choice: RegionChoice, rng: &mut R) {
        self.session.choose_region_with(&self.catalog, choice, rng);
    }

    pub fn advance(&mut self) {
        self.session.advance();
    }

    pub fn go_back(&mut self) {
        self.session.go_back();
    }

    pub fn reveal(&mut self) {
        self.session.reveal();
    }

    pub fn return_to_menu(&mut self) {
        self.session.return_to_menu();
    }

    pub fn current_display_state(&self) -> DisplayState {
        self.session.display_state()
    }

    /// Render plan for the current country, using the session's palette.
    pub fn current_render_plan(&self) -> RenderPlan {
        match self.session.current() {
            Some(name) => render_plan_for(
                &self.catalog,
                name,
                self.session.mode().unwrap_or(Mode::Learn),
            ),
            None => RenderPlan::empty(),
        }
    }
}
