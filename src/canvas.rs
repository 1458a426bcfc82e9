//! The pill canvas - shape store plus the pointer state machine around it.
//!
//! Pointer handling lives in `input::{pointer_down, pointer_move, pointer_up}`;
//! this module holds the struct, its construction and the render-facing view.

use crate::clock::{Clock, SystemClock};
use crate::error::{SettingsError, SettingsResult};
use crate::geometry::{Point, Rect};
use crate::hit_testing::HitTester;
use crate::ids::{IdSource, SequentialIds};
use crate::input::capture::{self, GestureKind, PointerCapture};
use crate::input::coords::CanvasOrigin;
use crate::input::press::{PressMemory, TapThresholds};
use crate::input::{InteractionState, PointerEvent, PointerKind};
use crate::palette::ColorPicker;
use crate::settings::CanvasSettings;
use crate::split::SplitEngine;
use crate::store::ShapeStore;
use crate::types::{Shape, ShapeId};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Everything a renderer needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Bottom to top
    pub shapes: Vec<Shape>,
    /// Box being drawn, if any
    pub preview: Option<Rect>,
    /// Crosshair position
    pub cursor: Point,
}

pub struct PillCanvas {
    pub(crate) settings: CanvasSettings,
    pub(crate) store: ShapeStore,
    pub(crate) input_state: InteractionState,
    pub(crate) press: PressMemory,
    pub(crate) capture: Option<PointerCapture>,
    pub(crate) cursor: Point,
    pub(crate) origin: CanvasOrigin,
    pub(crate) splitter: SplitEngine,
    pub(crate) ids: Box<dyn IdSource>,
    pub(crate) colors: ColorPicker,
    pub(crate) clock: Box<dyn Clock>,
}

impl PillCanvas {
    /// Canvas with sequential ids and the system clock.
    pub fn new(settings: CanvasSettings) -> SettingsResult<Self> {
        PillCanvasBuilder::new(settings).build()
    }

    pub fn builder(settings: CanvasSettings) -> PillCanvasBuilder {
        PillCanvasBuilder::new(settings)
    }

    /// Dispatch one event in canvas-local coordinates.
    pub fn handle_event(&mut self, event: PointerEvent) {
        if !capture::accepts(self.capture.as_ref(), &event) {
            trace!(?event, "Ignoring uncaptured pointer event");
            return;
        }

        match event.kind {
            PointerKind::Down => self.handle_pointer_down(event.position),
            PointerKind::Move => self.handle_pointer_move(event.position),
            PointerKind::Up => self.handle_pointer_up(event.position),
        }
        debug_assert!(
            self.capture_matches_state(),
            "capture {:?} out of step with {:?}",
            self.capture,
            self.input_state
        );
    }

    /// Dispatch one event given in screen coordinates.
    pub fn handle_screen_event(&mut self, mut event: PointerEvent) {
        event.position = self.origin.screen_to_canvas(event.position);
        self.handle_event(event);
    }

    pub fn shapes(&self) -> &[Shape] {
        self.store.shapes()
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    pub fn input_state(&self) -> &InteractionState {
        &self.input_state
    }

    pub fn press_memory(&self) -> &PressMemory {
        &self.press
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn preview(&self) -> Option<Rect> {
        self.input_state.preview()
    }

    pub fn has_pointer_capture(&self) -> bool {
        self.capture.is_some()
    }

    pub fn hit_tester(&self) -> HitTester<'_> {
        HitTester::new(&self.store)
    }

    pub fn frame(&self) -> Frame {
        Frame {
            shapes: self.store.shapes().to_vec(),
            preview: self.preview(),
            cursor: self.cursor,
        }
    }

    pub(crate) fn tap_thresholds(&self) -> TapThresholds {
        TapThresholds {
            max_distance: self.settings.tap_distance_threshold,
            max_duration_ms: self.settings.tap_time_threshold_ms,
        }
    }

    pub(crate) fn acquire_capture(&mut self, gesture: GestureKind) {
        let capture = PointerCapture::new(gesture);
        if let Some(previous) = self.capture.replace(capture) {
            debug!(?previous, "Replacing stale pointer capture");
        }
        trace!(?gesture, "Pointer captured");
    }

    /// A capture is held exactly while a gesture of its kind is active.
    fn capture_matches_state(&self) -> bool {
        match self.capture.map(|capture| capture.gesture) {
            None => self.input_state.is_idle(),
            Some(GestureKind::Draw) => self.input_state.is_drawing(),
            Some(GestureKind::Drag) => self.input_state.is_dragging(),
        }
    }

    pub(crate) fn release_capture(&mut self) {
        if let Some(capture) = self.capture.take() {
            trace!(gesture = ?capture.gesture, "Pointer capture released");
        }
    }

    /// Split every shape crossed by a crosshair at `p`.
    pub(crate) fn split_at(&mut self, p: Point, targets: &HashSet<ShapeId>) {
        if targets.is_empty() {
            return;
        }
        debug!(x = p.x, y = p.y, targets = targets.len(), "Splitting at crosshair");
        self.splitter.apply(&mut self.store, p, targets, self.ids.as_mut());
    }
}

impl std::fmt::Debug for PillCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PillCanvas")
            .field("shapes", &self.store.len())
            .field("input_state", &self.input_state)
            .field("capture", &self.capture)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

/// Builder for [`PillCanvas`] with injectable collaborators.
pub struct PillCanvasBuilder {
    settings: CanvasSettings,
    ids: Option<Box<dyn IdSource>>,
    clock: Option<Box<dyn Clock>>,
    shapes: Vec<Shape>,
    origin: CanvasOrigin,
}

impl PillCanvasBuilder {
    pub fn new(settings: CanvasSettings) -> Self {
        Self {
            settings,
            ids: None,
            clock: None,
            shapes: Vec::new(),
            origin: CanvasOrigin::default(),
        }
    }

    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Start with these shapes, bottom to top. Ids must be distinct. The
    /// default id source continues after the largest of them; an injected
    /// source must not produce any of them.
    pub fn with_shapes(mut self, shapes: Vec<Shape>) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn with_origin(mut self, origin: CanvasOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn build(self) -> SettingsResult<PillCanvas> {
        self.settings.validate()?;

        let mut seen = HashSet::with_capacity(self.shapes.len());
        if let Some(shape) = self.shapes.iter().find(|shape| !seen.insert(shape.id)) {
            return Err(SettingsError::DuplicateShapeId(shape.id));
        }

        let palette = self.settings.palette()?;
        let colors = match self.settings.palette_seed {
            Some(seed) => ColorPicker::seeded(palette, seed),
            None => ColorPicker::new(palette),
        };

        let ids: Box<dyn IdSource> = match self.ids {
            Some(ids) => ids,
            None => {
                let first = self
                    .shapes
                    .iter()
                    .map(|shape| shape.id.0.saturating_add(1))
                    .max()
                    .unwrap_or(1);
                Box::new(SequentialIds::starting_at(first))
            }
        };
        let clock: Box<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Box::new(SystemClock::new()),
        };

        Ok(PillCanvas {
            store: ShapeStore::from_shapes(self.shapes),
            input_state: InteractionState::Idle,
            press: PressMemory::default(),
            capture: None,
            cursor: self.settings.initial_cursor,
            origin: self.origin,
            splitter: SplitEngine::new(self.settings.min_size_to_split, self.settings.adjust_gap),
            ids,
            colors,
            clock,
            settings: self.settings,
        })
    }
}
