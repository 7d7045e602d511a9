// Surface lifecycle: allocate the raster surface to the container size, follow viewport
// resizes while mounted, and release everything on teardown.
// Reallocation discards pixels; earlier strokes are never rescaled onto the new surface.

use crate::types::FrameBuffer;
use log::{debug, info};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Current rendered size of the element the surface lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerMetrics {
    pub width: usize,
}

/// Registry of resize listeners for one viewport (what a window-level resize hook would be).
/// Cloning shares the registry.
#[derive(Clone, Debug, Default)]
pub struct ViewportEvents {
    inner: Rc<RefCell<Registry>>,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    /// Active listeners and the latest size delivered to each that it has not taken yet.
    active: BTreeMap<u64, Option<ContainerMetrics>>,
}

impl ViewportEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the returned guard is dropped.
    pub fn subscribe(&self) -> ResizeSubscription {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.active.insert(id, None);
        ResizeSubscription { id, events: self.clone() }
    }

    /// Deliver a new container size to every active listener. Sizes are coalesced: a
    /// listener that has not taken the previous one only sees the latest.
    /// Returns how many listeners were notified.
    pub fn resize(&self, container: ContainerMetrics) -> usize {
        let mut reg = self.inner.borrow_mut();
        for pending in reg.active.values_mut() {
            *pending = Some(container);
        }
        let notified = reg.active.len();
        debug!("viewport resized to width {}; {notified} listener(s)", container.width);
        notified
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    fn take_pending(&self, id: u64) -> Option<ContainerMetrics> {
        self.inner.borrow_mut().active.get_mut(&id).and_then(Option::take)
    }

    fn unsubscribe(&self, id: u64) {
        self.inner.borrow_mut().active.remove(&id);
    }
}

/// Scoped resize registration. Dropping it deregisters the listener.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    events: ViewportEvents,
}

impl ResizeSubscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Latest size delivered since the last call, if any.
    pub fn take_pending(&self) -> Option<ContainerMetrics> {
        self.events.take_pending(self.id)
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.events.unsubscribe(self.id);
        debug!("resize listener {} removed", self.id);
    }
}

/// Owns the raster surface and its resize registration.
#[derive(Debug)]
pub struct SurfaceLifecycle {
    height: usize,
    surface: Option<FrameBuffer>,
    subscription: Option<ResizeSubscription>,
}

impl SurfaceLifecycle {
    pub fn new(height: usize) -> Self {
        Self { height, surface: None, subscription: None }
    }

    /// Size the surface to the container and start listening for resizes.
    /// A second call re-measures but keeps the single existing registration.
    pub fn initialize(&mut self, container: ContainerMetrics, viewport: &ViewportEvents) {
        self.allocate(container.width);
        if let Some(sub) = &self.subscription {
            sub.take_pending(); // measured just now; an older delivered size is stale
        } else {
            let sub = viewport.subscribe();
            debug!("resize listener {} registered", sub.id());
            self.subscription = Some(sub);
        }
        info!("surface initialized at {}x{}", container.width, self.height);
    }

    /// Reallocate at the new container width; prior content is gone afterwards.
    /// Ignored when not initialized (no listener means no resize delivery).
    pub fn on_resize(&mut self, container: ContainerMetrics) -> bool {
        if self.subscription.is_none() {
            debug!("resize ignored: surface not mounted");
            return false;
        }
        self.allocate(container.width);
        info!("surface reallocated at {}x{}", container.width, self.height);
        true
    }

    /// Apply the resize delivered to this surface's listener since the last call.
    /// Returns true when the surface was reallocated.
    pub fn poll_resize(&mut self) -> bool {
        let pending = self.subscription.as_ref().and_then(ResizeSubscription::take_pending);
        let Some(container) = pending else {
            return false;
        };
        self.on_resize(container)
    }

    /// Deregister the resize listener and release the surface. Safe to repeat.
    pub fn teardown(&mut self) {
        if self.subscription.take().is_some() {
            info!("surface torn down");
        }
        self.surface = None;
    }

    /// Wipe to transparent. Returns false when there is no surface.
    pub fn clear_surface(&mut self) -> bool {
        match self.surface.as_mut() {
            Some(fb) => {
                fb.clear();
                true
            }
            None => false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn surface(&self) -> Option<&FrameBuffer> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut FrameBuffer> {
        self.surface.as_mut()
    }

    fn allocate(&mut self, width: usize) {
        self.surface = Some(FrameBuffer::new(width, self.height));
    }
}
