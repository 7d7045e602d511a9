// The signature capture surface: input tracker, stroke renderer, surface lifecycle and
// artifact exporter behind one owner. All mutation of the raster surface goes through here.
//
// Export happens in exactly two places: when a gesture that rendered at least one segment
// ends, and on clear (with None). Nothing is exported while a gesture is still open.

use crate::config::PadConfig;
use crate::export::{ArtifactSink, encode_png};
use crate::input::{InputTracker, PointerEvent};
use crate::lifecycle::{ContainerMetrics, SurfaceLifecycle, ViewportEvents};
use crate::render::{StrokeRenderer, StrokeStyle};
use crate::types::{FrameBuffer, SurfaceRect};
use log::{debug, info, warn};

/// Host events as they arrive from the window / page.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Down(PointerEvent),
    Move(PointerEvent),
    Up,
    /// Pointer left the surface; ends the gesture like a release.
    Leave,
    /// Touch cancelled by the host; ends the gesture like a release.
    Cancel,
}

pub struct SignaturePad<S: ArtifactSink> {
    config: PadConfig,
    tracker: InputTracker,
    renderer: StrokeRenderer,
    lifecycle: SurfaceLifecycle,
    rect: SurfaceRect,
    signed: bool,
    sink: S,
}

impl<S: ArtifactSink> SignaturePad<S> {
    pub fn new(config: PadConfig, sink: S) -> Self {
        let renderer = StrokeRenderer::new(StrokeStyle::from_config(&config));
        let lifecycle = SurfaceLifecycle::new(config.surface_height);
        Self {
            config,
            tracker: InputTracker::new(),
            renderer,
            lifecycle,
            rect: SurfaceRect::default(),
            signed: false,
            sink,
        }
    }

    /* ---------- lifecycle ---------- */

    pub fn initialize(&mut self, container: ContainerMetrics, viewport: &ViewportEvents) {
        self.abort_gesture();
        self.lifecycle.initialize(container, viewport);
        self.signed = false;
    }

    /// New container width. The surface is reallocated, so the signature is gone and the
    /// signed flag drops. No export is made for this.
    pub fn on_resize(&mut self, container: ContainerMetrics) {
        if self.lifecycle.on_resize(container) {
            self.abort_gesture();
            self.signed = false;
        }
    }

    /// Apply a resize delivered through the viewport this pad was initialized with.
    /// Input handling and `clear` call this first, so a pending resize is never skipped.
    pub fn process_viewport_events(&mut self) {
        if self.lifecycle.poll_resize() {
            self.abort_gesture();
            self.signed = false;
        }
    }

    pub fn teardown(&mut self) {
        self.abort_gesture();
        self.lifecycle.teardown();
        self.signed = false;
    }

    /// Where the surface currently sits in client coordinates (scroll / layout offset).
    pub fn set_origin(&mut self, rect: SurfaceRect) {
        self.rect = rect;
    }

    /* ---------- input ---------- */

    pub fn handle(&mut self, event: InputEvent) {
        self.process_viewport_events();
        match event {
            InputEvent::Down(ev) => self.begin(&ev),
            InputEvent::Move(ev) => self.extend(&ev),
            InputEvent::Up | InputEvent::Leave | InputEvent::Cancel => self.end(),
        }
    }

    /// Open a gesture. Events that cannot start one (secondary button, no touch contact)
    /// leave any open gesture untouched.
    pub fn begin(&mut self, event: &PointerEvent) {
        self.process_viewport_events();
        if !event.can_begin() {
            debug!("begin ignored: not a primary pointer / first touch");
            return;
        }
        if self.tracker.is_drawing() {
            debug!("begin while drawing: closing previous gesture first");
            self.end();
        }
        if let Some(at) = self.tracker.begin(event, self.rect) {
            self.renderer.begin_path(at);
        }
    }

    pub fn extend(&mut self, event: &PointerEvent) {
        self.process_viewport_events();
        let Some(at) = self.tracker.extend(event, self.rect) else {
            return;
        };
        if self.renderer.line_to(self.lifecycle.surface_mut(), at) {
            if let Some(session) = self.tracker.session_mut() {
                session.record_segment();
            }
            self.signed = true;
        }
    }

    pub fn end(&mut self) {
        self.process_viewport_events();
        let Some(session) = self.tracker.end() else {
            return;
        };
        self.renderer.end_path();
        if session.has_advanced() {
            self.export();
        } else {
            debug!("empty gesture: nothing to export");
        }
    }

    /* ---------- clear / export ---------- */

    /// Wipe the surface, drop the signed flag and tell the sink there is no signature.
    pub fn clear(&mut self) {
        self.process_viewport_events();
        self.abort_gesture();
        self.lifecycle.clear_surface();
        self.signed = false;
        info!("signature cleared");
        self.sink.on_artifact_change(None);
    }

    fn export(&mut self) {
        let Some(fb) = self.lifecycle.surface() else {
            return;
        };
        match encode_png(fb) {
            Ok(artifact) => self.sink.on_artifact_change(Some(artifact)),
            Err(e) => warn!("signature export failed: {e}"),
        }
    }

    fn abort_gesture(&mut self) {
        if self.tracker.end().is_some() {
            debug!("open gesture discarded");
        }
        self.renderer.end_path();
    }

    /* ---------- queries ---------- */

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    pub fn is_drawing(&self) -> bool {
        self.tracker.is_drawing()
    }

    /// Should the "Sign Here" hint be visible?
    pub fn show_placeholder(&self) -> bool {
        !self.signed
    }

    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn origin(&self) -> SurfaceRect {
        self.rect
    }

    pub fn surface(&self) -> Option<&FrameBuffer> {
        self.lifecycle.surface()
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
