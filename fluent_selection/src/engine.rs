// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection gesture state machine.

use alloc::boxed::Box;

use fluent_host::{CopyMethod, Vibration};
use fluent_range::{FlexibleRange, NativeRange};
use fluent_touch::{
    FormattedTouches, Platform, PointerKind, SharedTouchRegistry, TouchEvent, UnbalancedUnmount,
};
use kurbo::{Point, Vec2};

use crate::config::{DEFAULT_HANDLE_HEIGHT, SelectionConfig};
use crate::geometry::{anchor_target, hit_point, is_dismiss_swipe, touch_shift};
use crate::host::{GestureHost, HandlePlacement, HandleSide};
use crate::quirks::{SelectionQuirks, quirks_for};

/// Slot of the touch that drags the end anchor (the first finger down).
const END_SLOT: usize = 0;
/// Slot of the touch that drags the start anchor (the second finger down).
const START_SLOT: usize = 1;

/// Coarse state of a [`SelectionGestureEngine`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Waiting for a touch pointer.
    Idle,
    /// A touch pointer went down; the next selection change may show the pad.
    Armed,
    /// At least one touch is dragging an anchor.
    Manipulating,
}

/// Touch deltas of one frame, captured while the registry is borrowed.
#[derive(Copy, Clone, Debug)]
struct FrameShifts {
    start_touch: bool,
    end_touch: bool,
    start: Vec2,
    end: Vec2,
}

/// Drives a manipulation pad over the host selection.
///
/// The engine never touches the document on its own: each method is the
/// handler of one host event and receives the host to act on.
///
/// | Host event | Method |
/// |---|---|
/// | first document touch start | [`initialize`](Self::initialize) |
/// | document pointer down | [`anticipate_selection`](Self::anticipate_selection) |
/// | document selection change | [`launch_manipulator`](Self::launch_manipulator) |
/// | pad touch start / move | [`manipulate_selection`](Self::manipulate_selection) |
/// | pad touch end / cancel | [`stop_manipulation`](Self::stop_manipulation) |
/// | pad touch end (capture) | [`touch_end_capture`](Self::touch_end_capture) |
/// | pad double tap | [`copy_selection`](Self::copy_selection) |
/// | timer tick | [`advance`](Self::advance) |
/// | next tick | [`flush_deferred`](Self::flush_deferred) |
///
/// The first finger on the pad drags the end anchor and the second finger
/// drags the start anchor. Each anchor follows its finger's movement since
/// first contact, measured from where the anchor sat when the gesture began.
pub struct SelectionGestureEngine<R: NativeRange> {
    config: SelectionConfig,
    quirks: Box<dyn SelectionQuirks>,
    registry: SharedTouchRegistry,
    mounted: bool,
    initialized: bool,
    selecting: bool,
    manipulating: bool,
    anticipating: bool,
    origin_range: Option<FlexibleRange<R>>,
    select_range: Option<FlexibleRange<R>>,
    pad_enable_deadline: Option<u64>,
    refresh_pending: bool,
}

impl<R: NativeRange> core::fmt::Debug for SelectionGestureEngine<R>
where
    R: core::fmt::Debug,
    R::Node: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionGestureEngine")
            .field("config", &self.config)
            .field("quirks", &self.quirks)
            .field("phase", &self.phase())
            .field("selecting", &self.selecting)
            .field("origin_range", &self.origin_range)
            .field("select_range", &self.select_range)
            .field("pad_enable_deadline", &self.pad_enable_deadline)
            .finish_non_exhaustive()
    }
}

impl<R: NativeRange> SelectionGestureEngine<R> {
    /// Creates an engine reading touches from `registry`.
    pub fn new(
        registry: SharedTouchRegistry,
        quirks: impl SelectionQuirks + 'static,
        config: SelectionConfig,
    ) -> Self {
        Self::with_boxed_quirks(registry, Box::new(quirks), config)
    }

    /// Creates an engine with the selection quirks of `platform`.
    pub fn for_platform(
        registry: SharedTouchRegistry,
        platform: Platform,
        config: SelectionConfig,
    ) -> Self {
        Self::with_boxed_quirks(registry, quirks_for(platform), config)
    }

    fn with_boxed_quirks(
        registry: SharedTouchRegistry,
        quirks: Box<dyn SelectionQuirks>,
        config: SelectionConfig,
    ) -> Self {
        Self {
            config,
            quirks,
            registry,
            mounted: false,
            initialized: false,
            selecting: false,
            manipulating: false,
            anticipating: false,
            origin_range: None,
            select_range: None,
            pad_enable_deadline: None,
            refresh_pending: false,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// The shared touch registry.
    pub fn registry(&self) -> &SharedTouchRegistry {
        &self.registry
    }

    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        if self.manipulating {
            GesturePhase::Manipulating
        } else if self.anticipating {
            GesturePhase::Armed
        } else {
            GesturePhase::Idle
        }
    }

    /// Whether the first document touch has been seen.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether a selection exists that the pad should manipulate.
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// Whether a touch is dragging an anchor.
    pub fn is_manipulating(&self) -> bool {
        self.manipulating
    }

    /// Whether the pad is held inactive after a native selection change.
    pub fn is_pad_suppressed(&self) -> bool {
        self.pad_enable_deadline.is_some()
    }

    /// Snapshot of the selection at gesture start, updated as fingers lift.
    pub fn origin_range(&self) -> Option<&FlexibleRange<R>> {
        self.origin_range.as_ref()
    }

    /// The live range installed as the host selection.
    pub fn select_range(&self) -> Option<&FlexibleRange<R>> {
        self.select_range.as_ref()
    }

    /// Attaches the engine to the document by mounting the touch registry.
    pub fn mount<H>(&mut self, host: &mut H)
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        if self.mounted {
            return;
        }
        self.registry.borrow_mut().mount(host);
        self.mounted = true;
    }

    /// Activates the engine. Hosts call this on the first document touch so
    /// that mouse-only sessions never show the pad.
    ///
    /// Returns `true` the first time; the host then starts forwarding pointer
    /// down and selection change events.
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.anticipating = true;
        #[cfg(feature = "tracing")]
        tracing::debug!("selection engine initialized");
        true
    }

    /// Detaches the engine and drops pending timers and pulses.
    pub fn unmount<H>(&mut self, host: &mut H) -> Result<(), UnbalancedUnmount>
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        if !self.mounted {
            return Err(UnbalancedUnmount);
        }
        self.registry.borrow_mut().unmount(host)?;
        self.mounted = false;
        self.pad_enable_deadline = None;
        if self.refresh_pending {
            self.refresh_pending = false;
            host.set_refreshing(false);
        }
        self.manipulating = false;
        self.anticipating = false;
        Ok(())
    }

    /// Pointer down anywhere in the document.
    ///
    /// A touch arms the engine; any other pointer disarms it and hides the pad.
    pub fn anticipate_selection<H>(&mut self, host: &mut H, kind: PointerKind)
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        if !self.initialized {
            return;
        }
        if kind == PointerKind::Touch {
            self.anticipating = true;
        } else {
            self.anticipating = false;
            self.set_selecting(host, false);
        }
    }

    /// Selection change in the document.
    ///
    /// Only acts when armed and not dragging. Shows the pad when the selection
    /// is a non-empty range or is the engine's own live range. A native change
    /// while the pad is already showing holds the pad inactive for the
    /// configured inactivity window, restarting the window on every change.
    pub fn launch_manipulator<H>(&mut self, host: &mut H, now: u64)
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        if !self.initialized || !self.anticipating || self.manipulating {
            return;
        }
        let count = host.range_count();
        let matches = match (host.range_at(0), &self.select_range) {
            (Some(first), Some(live)) if count > 0 => live.same_bounds(&first),
            _ => false,
        };
        let should_select = (!host.is_collapsed() && count > 0) || matches;
        if self.selecting && should_select && !matches {
            let deadline = now.saturating_add(self.config.inactivity_window);
            self.pad_enable_deadline = Some(deadline);
            #[cfg(feature = "tracing")]
            tracing::debug!(deadline, "pad suppressed");
        }
        self.set_selecting(host, should_select);
        self.anticipating = false;
    }

    /// Touch start or move on the pad.
    ///
    /// The first touch of a gesture snapshots the host selection and installs
    /// a live copy of it. Every call then re-resolves both anchors.
    pub fn manipulate_selection<H>(&mut self, host: &mut H, event: &TouchEvent)
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        if host.range_count() == 0 {
            return;
        }
        let Some(first) = host.range_at(0) else {
            return;
        };
        let touches = self
            .registry
            .borrow()
            .format_touches(&event.target_touches);

        if !self.manipulating {
            self.manipulating = true;
            host.set_handles_visible(true);
            self.origin_range = Some(FlexibleRange::from_range(&first));
            let live = FlexibleRange::from_range(&first);
            host.remove_all_ranges();
            host.add_range(live.native());
            self.select_range = Some(live);
            #[cfg(feature = "tracing")]
            tracing::debug!("manipulation started");
        }

        self.resolve_frame(host, &touches);
    }

    /// Touch end or cancel on the pad.
    ///
    /// A lifted finger pins its anchor where it was dropped. Lifting the last
    /// finger either dismisses the selection (fast downward swipe) or settles
    /// the gesture.
    pub fn stop_manipulation<H>(&mut self, host: &mut H, event: &TouchEvent)
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        let registry = self.registry.borrow();
        if let (Some(origin), Some(live)) = (&mut self.origin_range, &self.select_range) {
            for touch in &event.changed_touches {
                match registry.normalize_identifier(touch) {
                    Some(START_SLOT) => origin.set_start(live.registered_start().cloned()),
                    Some(END_SLOT) => origin.set_end(live.registered_end().cloned()),
                    _ => {}
                }
            }
        }

        let lifted_all = event.target_touches.is_empty();
        if lifted_all {
            if let Some(touch) = event.changed_touches.first() {
                let origin = registry
                    .normalize_identifier(touch)
                    .and_then(|slot| registry.origin(slot));
                let travel = touch.position.y - origin.map_or(0.0, |origin| origin.position.y);
                let elapsed = event
                    .timestamp
                    .saturating_sub(origin.map_or(0, |origin| origin.timestamp));
                if is_dismiss_swipe(travel, elapsed, &self.config) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(travel, elapsed, "selection dismissed by swipe");
                    host.remove_all_ranges();
                }
            }
            if let Some(origin) = &mut self.origin_range {
                if origin.is_reversed() {
                    origin.reverse();
                }
            }
        }
        drop(registry);

        self.manipulate_selection(host, event);

        if lifted_all {
            self.manipulating = false;
            host.set_handles_visible(false);
            #[cfg(feature = "tracing")]
            tracing::debug!("manipulation stopped");
        }
    }

    /// Capture-phase touch end on the pad: restores a selection the host
    /// dropped when the finger lifted.
    pub fn touch_end_capture<H>(&mut self, host: &mut H)
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        if self.quirks.resync_on_interaction() {
            self.reselect_ranges(host);
        }
    }

    /// Double tap on the pad: copies the selected text.
    pub fn copy_selection<H>(&mut self, host: &mut H) -> CopyMethod
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        if self.quirks.resync_on_interaction() {
            self.reselect_ranges(host);
        }
        host.set_refreshing(true);
        self.refresh_pending = true;
        fluent_host::vibrate(host, Vibration::pattern(&[50, 0, 50]));
        let text = host.selected_text();
        fluent_host::copy_text(host, &text)
    }

    /// Re-installs the live range as the host selection.
    pub fn reselect_ranges<H>(&mut self, host: &mut H)
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        let Some(live) = &self.select_range else {
            return;
        };
        host.remove_all_ranges();
        host.add_range(live.native());
    }

    /// Fires the pad re-enable deadline if `now` has reached it.
    ///
    /// Returns `true` if the pad was re-enabled.
    pub fn advance<H>(&mut self, host: &mut H, now: u64) -> bool
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        match self.pad_enable_deadline {
            Some(deadline) if now >= deadline => {
                self.pad_enable_deadline = None;
                host.set_active(self.selecting);
                true
            }
            _ => false,
        }
    }

    /// Runs next-tick work: ends the refresh pulse.
    pub fn flush_deferred<H>(&mut self, host: &mut H)
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        if self.refresh_pending {
            self.refresh_pending = false;
            host.set_refreshing(false);
        }
    }

    fn set_selecting<H>(&mut self, host: &mut H, selecting: bool)
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        #[cfg(feature = "tracing")]
        if self.selecting != selecting {
            tracing::debug!(selecting, "pad visibility changed");
        }
        self.selecting = selecting;
        host.set_active(selecting && self.pad_enable_deadline.is_none());
    }

    fn frame_shifts(&self, touches: &FormattedTouches) -> FrameShifts {
        let registry = self.registry.borrow();
        let touch = |slot: usize| touches.get(slot).and_then(Option::as_ref);
        FrameShifts {
            start_touch: touch(START_SLOT).is_some(),
            end_touch: touch(END_SLOT).is_some(),
            start: touch_shift(touch(START_SLOT), registry.origin(START_SLOT)),
            end: touch_shift(touch(END_SLOT), registry.origin(END_SLOT)),
        }
    }

    fn resolve_frame<H>(&mut self, host: &mut H, touches: &FormattedTouches)
    where
        H: GestureHost<Range = R> + ?Sized,
    {
        let shifts = self.frame_shifts(touches);
        let (Some(origin), Some(live)) = (&self.origin_range, &mut self.select_range) else {
            return;
        };
        let old_bounds = (live.native().start(), live.native().end());

        let origin_start = origin.start_coords();
        let origin_end = origin.end_coords();
        let start_target = anchor_target(origin_start.point(), shifts.start);
        let end_target = anchor_target(origin_end.point(), shifts.end);

        host.set_pointer_passthrough(true);
        if shifts.start_touch {
            let hit = host.caret_from_point(hit_point(start_target, origin_start.height));
            live.set_start(hit.map(|hit| hit.into_position()));
        }
        if shifts.end_touch {
            let hit = host.caret_from_point(hit_point(end_target, origin_end.height));
            live.set_end(hit.map(|hit| hit.into_position()));
        }
        host.set_pointer_passthrough(false);

        let start_height = live.start_coords().height;
        let end_height = live.end_coords().height;
        let moved = old_bounds != (live.native().start(), live.native().end());

        if self.quirks.resync_every_frame() || host.is_collapsed() {
            self.reselect_ranges(host);
        }

        place(host, HandleSide::Start, start_target, start_height, shifts.start_touch);
        place(host, HandleSide::End, end_target, end_height, shifts.end_touch);

        if moved && self.config.movement_feedback {
            fluent_host::vibrate(host, Vibration::pulse(1));
        }
    }
}

fn place<H: GestureHost + ?Sized>(
    host: &mut H,
    side: HandleSide,
    position: Point,
    height: Option<f64>,
    manipulating: bool,
) {
    host.place_handle(
        side,
        HandlePlacement {
            position,
            height: height.unwrap_or(DEFAULT_HANDLE_HEIGHT),
            manipulating,
        },
    );
}
