// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording host over a grid document, shared by the engine tests.

#![allow(dead_code, reason = "not every test file uses every helper")]

use std::cell::RefCell;

use fluent_host::{Capabilities, HostServices, Vibration};
use fluent_range::testing::{GridDocument, GridRange};
use fluent_range::{NativeRange, Position};
use fluent_selection::{
    CaretHit, HandlePlacement, HandleSide, PadSurface, SelectionConfig, SelectionGestureEngine,
    SelectionHost,
};
use fluent_touch::{Platform, SharedTouchRegistry, Touch, TouchEvent, TouchHost, TouchRegistry};
use kurbo::Point;

pub const TEXT: [&str; 3] = [
    "The quick brown fox jumps",
    "over the lazy dog and",
    "keeps on running away",
];

pub struct MockHost {
    pub doc: GridDocument,
    pub ranges: Vec<GridRange>,
    pub capabilities: Capabilities,
    pub range_hits: bool,
    pub active: Option<bool>,
    pub passthrough: bool,
    pub passthrough_during_hits: RefCell<Vec<bool>>,
    pub refreshing: bool,
    pub handles_visible: bool,
    pub start_handle: Option<HandlePlacement>,
    pub end_handle: Option<HandlePlacement>,
    pub add_range_calls: usize,
    pub vibrations: Vec<Vibration>,
    pub clipboard: Vec<String>,
    pub exec_copies: usize,
    pub attached: usize,
    pub detached: usize,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            doc: GridDocument::new(&TEXT),
            ranges: Vec::new(),
            capabilities: Capabilities::empty(),
            range_hits: false,
            active: None,
            passthrough: false,
            passthrough_during_hits: RefCell::new(Vec::new()),
            refreshing: false,
            handles_visible: false,
            start_handle: None,
            end_handle: None,
            add_range_calls: 0,
            vibrations: Vec::new(),
            clipboard: Vec::new(),
            exec_copies: 0,
            attached: 0,
            detached: 0,
        }
    }

    /// Replaces the selection the way a native selection change would.
    pub fn select_natively(&mut self, start: (usize, usize), end: (usize, usize)) {
        let range = self.doc.range(
            Position::new(start.0, start.1),
            Position::new(end.0, end.1),
        );
        self.ranges.clear();
        self.ranges.push(range);
    }

    pub fn bounds(&self) -> Option<(Position<usize>, Position<usize>)> {
        self.ranges.first().map(|range| (range.start(), range.end()))
    }

    pub fn text(&self) -> String {
        self.selected_text()
    }
}

impl HostServices for MockHost {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn vibrate(&mut self, vibration: &Vibration) {
        self.vibrations.push(vibration.clone());
    }

    fn write_clipboard_text(&mut self, text: &str) {
        self.clipboard.push(text.to_owned());
    }

    fn exec_copy(&mut self) {
        self.exec_copies += 1;
    }
}

impl TouchHost for MockHost {
    fn attach_listeners(&mut self) {
        self.attached += 1;
    }

    fn detach_listeners(&mut self) {
        self.detached += 1;
    }
}

impl SelectionHost for MockHost {
    type Range = GridRange;

    fn range_count(&self) -> usize {
        self.ranges.len()
    }

    fn range_at(&self, index: usize) -> Option<GridRange> {
        self.ranges.get(index).cloned()
    }

    fn is_collapsed(&self) -> bool {
        self.ranges.first().is_none_or(NativeRange::is_collapsed)
    }

    fn remove_all_ranges(&mut self) {
        self.ranges.clear();
    }

    fn add_range(&mut self, range: &GridRange) {
        self.add_range_calls += 1;
        self.ranges.push(range.clone());
    }

    fn selected_text(&self) -> String {
        self.ranges.first().map(GridRange::text).unwrap_or_default()
    }

    fn caret_from_point(&self, point: Point) -> Option<CaretHit<usize>> {
        self.passthrough_during_hits
            .borrow_mut()
            .push(self.passthrough);
        let position = self.doc.caret_at(point)?;
        Some(if self.range_hits {
            CaretHit::Range {
                start: position,
                end: position,
            }
        } else {
            CaretHit::Position(position)
        })
    }
}

impl PadSurface for MockHost {
    fn set_active(&mut self, active: bool) {
        self.active = Some(active);
    }

    fn set_pointer_passthrough(&mut self, passthrough: bool) {
        self.passthrough = passthrough;
    }

    fn set_refreshing(&mut self, refreshing: bool) {
        self.refreshing = refreshing;
    }

    fn set_handles_visible(&mut self, visible: bool) {
        self.handles_visible = visible;
    }

    fn place_handle(&mut self, side: HandleSide, placement: HandlePlacement) {
        match side {
            HandleSide::Start => self.start_handle = Some(placement),
            HandleSide::End => self.end_handle = Some(placement),
        }
    }
}

/// A host, a registry, and an engine wired together the way a page would.
pub struct Harness {
    pub host: MockHost,
    pub registry: SharedTouchRegistry,
    pub engine: SelectionGestureEngine<GridRange>,
}

impl Harness {
    pub fn new(platform: Platform) -> Self {
        Self::with_config(platform, SelectionConfig::default())
    }

    pub fn with_config(platform: Platform, config: SelectionConfig) -> Self {
        let registry = TouchRegistry::for_platform(platform).into_shared();
        let mut host = MockHost::new();
        let mut engine =
            SelectionGestureEngine::for_platform(registry.clone(), platform, config);
        engine.mount(&mut host);
        engine.initialize();
        Self {
            host,
            registry,
            engine,
        }
    }

    /// Capture-phase registration followed by the pad's touch start.
    pub fn touch_start(&mut self, timestamp: u64, changed: &[Touch], targets: &[Touch]) {
        let event = TouchEvent::new(timestamp)
            .with_changed(changed)
            .with_targets(targets);
        self.registry.borrow_mut().register_touches_from_event(&event);
        self.engine.manipulate_selection(&mut self.host, &event);
    }

    pub fn touch_move(&mut self, timestamp: u64, changed: &[Touch], targets: &[Touch]) {
        let event = TouchEvent::new(timestamp)
            .with_changed(changed)
            .with_targets(targets);
        self.registry.borrow_mut().track_movement(&event);
        self.engine.manipulate_selection(&mut self.host, &event);
    }

    /// Capture-phase release, the pad's handlers, then the next tick.
    pub fn touch_end(&mut self, timestamp: u64, changed: &[Touch], targets: &[Touch]) {
        let event = TouchEvent::new(timestamp)
            .with_changed(changed)
            .with_targets(targets);
        self.registry
            .borrow_mut()
            .unregister_touches_from_event(&event);
        self.engine.touch_end_capture(&mut self.host);
        self.engine.stop_manipulation(&mut self.host, &event);
        self.registry.borrow_mut().flush_deferred();
        self.engine.flush_deferred(&mut self.host);
    }
}
