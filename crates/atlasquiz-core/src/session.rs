// crates/atlasquiz-core/src/session.rs

//! # Quiz Session
//!
//! Per-user traversal state: `NoMode → mode chosen → region chosen`.
//! Every operation is total; anything attempted on absent or empty state is a
//! no-op. Sessions hold display names only and borrow the catalog when they
//! need it, so any number of them can share one catalog.

use crate::catalog::{Catalog, Region};
use crate::error::AtlasError;
use crate::text::equals_folded;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text shown before a region has been chosen.
pub const PROMPT: &str = "Select a region to start";
/// Text shown in Quiz mode until the name is revealed.
pub const HIDDEN: &str = "?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Name always visible.
    Learn,
    /// Name hidden until revealed.
    Quiz,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Learn => "learn",
            Mode::Quiz => "quiz",
        })
    }
}

impl FromStr for Mode {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "learn" => Ok(Mode::Learn),
            "quiz" => Ok(Mode::Quiz),
            _ => Err(AtlasError::UnknownMode(s.to_owned())),
        }
    }
}

/// A region, or every region at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionChoice {
    All,
    Only(Region),
}

impl RegionChoice {
    /// The choices offered to the user, in menu order.
    pub fn list() -> [RegionChoice; 6] {
        [
            RegionChoice::Only(Region::Europe),
            RegionChoice::Only(Region::Asia),
            RegionChoice::Only(Region::Africa),
            RegionChoice::Only(Region::Americas),
            RegionChoice::Only(Region::Oceania),
            RegionChoice::All,
        ]
    }
}

impl From<Region> for RegionChoice {
    fn from(region: Region) -> Self {
        RegionChoice::Only(region)
    }
}

impl fmt::Display for RegionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionChoice::All => f.write_str("All"),
            RegionChoice::Only(region) => write!(f, "{region}"),
        }
    }
}

impl FromStr for RegionChoice {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if equals_folded(s, "all") {
            return Ok(RegionChoice::All);
        }
        s.parse::<Region>().map(RegionChoice::Only)
    }
}

/// What the presentation layer needs to render the name area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub display_name: Option<String>,
    pub revealed: bool,
    pub mode: Option<Mode>,
}

impl DisplayState {
    /// The heading text for the current state.
    pub fn headline(&self) -> &str {
        match (&self.display_name, self.mode) {
            (None, _) => PROMPT,
            (Some(_), Some(Mode::Quiz)) if !self.revealed => HIDDEN,
            (Some(name), _) => name.as_str(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    mode: Option<Mode>,
    region: Option<RegionChoice>,
    order: Vec<String>,
    index: usize,
    revealed: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn region(&self) -> Option<RegionChoice> {
        self.region
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Current display name, if a non-empty region has been chosen.
    pub fn current(&self) -> Option<&str> {
        self.order.get(self.index).map(String::as_str)
    }

    /// Set the mode and wait for a region. Any previous traversal is dropped.
    pub fn choose_mode(&mut self, mode: Mode) {
        debug!("mode -> {mode}");
        *self = Self {
            mode: Some(mode),
            ..Self::default()
        };
    }

    /// Shuffle the names of `choice` into a fresh traversal.
    pub fn choose_region(&mut self, catalog: &Catalog, choice: RegionChoice) {
        self.choose_region_with(catalog, choice, &mut rand::rng());
    }

    /// [`choose_region`](Self::choose_region) with a caller-supplied RNG.
    ///
    /// No-op until a mode has been chosen. An empty region is legal and
    /// yields an empty traversal.
    pub fn choose_region_with<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        choice: RegionChoice,
        rng: &mut R,
    ) {
        if self.mode.is_none() {
            debug!("region {choice} ignored: no mode chosen");
            return;
        }
        let mut order: Vec<String> = catalog
            .names_for(choice)
            .into_iter()
            .map(str::to_owned)
            .collect();
        order.shuffle(rng);
        debug!("region -> {choice} ({} countries)", order.len());
        self.region = Some(choice);
        self.order = order;
        self.index = 0;
        self.revealed = false;
    }

    pub fn advance(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.order.len();
        self.revealed = false;
    }

    pub fn go_back(&mut self) {
        if self.order.is_empty() {
            return;
        }
        let len = self.order.len();
        self.index = (self.index + len - 1) % len;
        self.revealed = false;
    }

    /// Show the current name; cleared by the next move.
    pub fn reveal(&mut self) {
        if self.current().is_some() {
            self.revealed = true;
        }
    }

    pub fn return_to_menu(&mut self) {
        debug!("back to menu");
        *self = Self::default();
    }

    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            display_name: self.current().map(str::to_owned),
            revealed: self.revealed,
            mode: self.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::geometry::Geometry;
    use crate::resolver;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Catalog {
        let rows = [
            (Region::Europe, "Italien"),
            (Region::Europe, "Spanien"),
            (Region::Europe, "Polen"),
            (Region::Africa, "Kenia"),
        ];
        Catalog::from_entries(
            rows.iter()
                .map(|(region, name)| CatalogEntry {
                    region: *region,
                    identity: resolver::resolve(name),
                    geometry: Geometry::degenerate(),
                })
                .collect(),
        )
    }

    fn session(choice: RegionChoice) -> QuizSession {
        let mut s = QuizSession::new();
        s.choose_mode(Mode::Learn);
        s.choose_region_with(&catalog(), choice, &mut StdRng::seed_from_u64(7));
        s
    }

    #[test]
    fn region_order_is_a_permutation() {
        let s = session(Region::Europe.into());
        let mut names = s.order().to_vec();
        names.sort();
        assert_eq!(names, vec!["Italien", "Polen", "Spanien"]);
        assert_eq!(s.index(), 0);
        assert!(!s.is_revealed());
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut s = session(RegionChoice::All);
        assert_eq!(s.order().len(), 4);
        s.go_back();
        assert_eq!(s.index(), 3);
        s.advance();
        assert_eq!(s.index(), 0);
        for start in 0..4 {
            while s.index() != start {
                s.advance();
            }
            s.advance();
            s.go_back();
            assert_eq!(s.index(), start);
        }
    }

    #[test]
    fn reveal_is_idempotent_and_cleared_by_moves() {
        let mut s = session(RegionChoice::All);
        s.reveal();
        s.reveal();
        assert!(s.is_revealed());
        s.advance();
        assert!(!s.is_revealed());
        s.reveal();
        s.go_back();
        assert!(!s.is_revealed());
    }

    #[test]
    fn empty_region_is_a_quiet_no_op() {
        let mut s = session(Region::Oceania.into());
        assert_eq!(s.region(), Some(RegionChoice::Only(Region::Oceania)));
        assert!(s.order().is_empty());
        s.advance();
        s.go_back();
        s.reveal();
        assert_eq!(s.index(), 0);
        assert!(!s.is_revealed());
        assert_eq!(s.current(), None);
    }

    #[test]
    fn region_needs_a_mode() {
        let mut s = QuizSession::new();
        s.choose_region(&catalog(), RegionChoice::All);
        assert_eq!(s.region(), None);
        assert!(s.order().is_empty());
    }

    #[test]
    fn return_to_menu_resets_everything() {
        let mut s = session(RegionChoice::All);
        s.advance();
        s.reveal();
        s.return_to_menu();
        assert_eq!(s.mode(), None);
        assert_eq!(s.region(), None);
        assert!(s.order().is_empty());
        assert_eq!(s.index(), 0);
        assert!(!s.is_revealed());
    }

    #[test]
    fn headline_follows_mode_and_reveal() {
        let mut s = QuizSession::new();
        assert_eq!(s.display_state().headline(), PROMPT);

        s.choose_mode(Mode::Quiz);
        s.choose_region_with(&catalog(), Region::Africa.into(), &mut StdRng::seed_from_u64(1));
        assert_eq!(s.display_state().headline(), HIDDEN);
        s.reveal();
        assert_eq!(s.display_state().headline(), "Kenia");

        s.choose_mode(Mode::Learn);
        s.choose_region_with(&catalog(), Region::Africa.into(), &mut StdRng::seed_from_u64(1));
        assert_eq!(s.display_state().headline(), "Kenia");
    }

    #[test]
    fn parse_mode_and_region_choice() {
        assert_eq!("Quiz".parse::<Mode>().unwrap(), Mode::Quiz);
        assert!("play".parse::<Mode>().is_err());
        assert_eq!("ALL".parse::<RegionChoice>().unwrap(), RegionChoice::All);
        assert_eq!(
            "oceania".parse::<RegionChoice>().unwrap(),
            RegionChoice::Only(Region::Oceania)
        );
        assert_eq!(RegionChoice::list().len(), 6);
        assert_eq!(RegionChoice::All.to_string(), "All");
    }
}
