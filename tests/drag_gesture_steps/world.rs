//! Shared world state for drag gesture BDD scenarios.

use std::sync::Arc;

use chrono::DateTime;
use questboard::board::{
    adapters::memory::{
        InMemoryBoard, ManualClock, RecordingHaptics, RecordingInputSurface, RecordingObserver,
    },
    config::DragConfig,
    domain::{ContainerId, Point},
    ports::ContainerGeometry,
    services::{DragCollaborators, DragEngine, PressOutcome, ReleaseOutcome},
};
use rstest::fixture;

/// Engine type used by the BDD world.
pub type TestEngine = DragEngine<
    InMemoryBoard,
    InMemoryBoard,
    RecordingInputSurface,
    RecordingObserver,
    RecordingHaptics,
    ManualClock,
>;

/// Scenario world for drag gesture behaviour tests.
pub struct DragWorld {
    pub engine: TestEngine,
    pub board: Arc<InMemoryBoard>,
    pub observer: Arc<RecordingObserver>,
    pub haptics: Arc<RecordingHaptics>,
    pub clock: Arc<ManualClock>,
    pub last_press: Option<PressOutcome>,
    pub last_release: Option<ReleaseOutcome>,
}

impl DragWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        let board = Arc::new(InMemoryBoard::new());
        let observer = Arc::new(RecordingObserver::new());
        let haptics = Arc::new(RecordingHaptics::new());
        let start = DateTime::from_timestamp(1_750_000_000, 0).unwrap_or_default();
        let clock = Arc::new(ManualClock::new(start));
        let engine = DragEngine::new(
            DragCollaborators {
                geometry: Arc::clone(&board),
                store: Arc::clone(&board),
                surface: Arc::new(RecordingInputSurface::new()),
                observer: Arc::clone(&observer),
                haptics: Arc::clone(&haptics),
            },
            Arc::clone(&clock),
            DragConfig::default(),
        )
        .expect("default config is valid");

        Self {
            engine,
            board,
            observer,
            haptics,
            clock,
            last_press: None,
            last_release: None,
        }
    }

    /// Returns the centre of a column's current bounds.
    #[expect(
        clippy::float_arithmetic,
        reason = "centre of a rectangle is float math"
    )]
    pub fn centre_of(&self, column: &str) -> Result<Point, eyre::Report> {
        let id = ContainerId::new(column)?;
        let bounds = self
            .board
            .bounds(&id)
            .ok_or_else(|| eyre::eyre!("column {column} has no bounds"))?;
        Ok(Point::new(
            (bounds.left() + bounds.right()) / 2.0,
            (bounds.top() + bounds.bottom()) / 2.0,
        ))
    }
}

impl Default for DragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragWorld {
    DragWorld::default()
}
