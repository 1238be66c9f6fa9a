// Lifecycle coordinator - the component that owns "which demo is active"
//
// The coordinator runs as a single task draining navigation requests from an
// mpsc channel, so demo transitions are serialized by construction: a second
// request arriving while a load is in flight waits its turn instead of
// interleaving unload/load steps. All UI updates leave here as UiEffect
// values; the TUI applies them. All demo-contract failures are caught at
// this boundary and logged - a bad demo never breaks navigation to the
// next one.

use crate::demo::{Demo, DemoError, DemoLoader, LoadError};
use crate::events::{NavRequest, UiEffect};
use crate::location::Location;
use crate::registry::ModuleRegistry;
use std::collections::HashSet;
use tokio::sync::mpsc;

/// Transitional title shown between unloading one demo and starting the next.
pub const LOADING_TITLE: &str = "Loading...";

/// Where the coordinator is in a demo's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No demo loaded (initial state, and the landing state after a failure).
    Idle,
    Loading,
    Running,
    Unloading,
}

pub struct Coordinator {
    registry: ModuleRegistry,
    loader: Box<dyn DemoLoader>,
    location: Location,
    effects: mpsc::Sender<UiEffect>,

    /// At most one live demo at a time.
    active: Option<Box<dyn Demo>>,
    current: usize,
    /// Indices activated at least once this session.
    visited: HashSet<usize>,
    /// When set, revisiting any index in `visited` forces a session restart
    /// instead of an in-place activation. Disabled, the coordinator tears
    /// down in place and accepts whatever the old demo leaked.
    reload_guard: bool,
    phase: Phase,
}

impl Coordinator {
    pub fn new(
        registry: ModuleRegistry,
        loader: Box<dyn DemoLoader>,
        location: Location,
        effects: mpsc::Sender<UiEffect>,
        reload_guard: bool,
    ) -> Self {
        Self {
            registry,
            loader,
            location,
            effects,
            active: None,
            current: 0,
            visited: HashSet::new(),
            reload_guard,
            phase: Phase::Idle,
        }
    }

    /// Drive the coordinator until the request channel closes, then tear the
    /// active demo down and hand the final location back to the shell.
    pub async fn run(mut self, mut requests: mpsc::Receiver<NavRequest>) -> Location {
        // The address index is clamped only here; later history-derived
        // indices are taken as-is and fail module resolution if out of range.
        let mut initial = self.location.read_index();
        if initial >= self.registry.len() {
            tracing::warn!("address index {} is out of range; starting at 0", initial);
            initial = 0;
        }
        self.request(initial, true).await;

        while let Some(request) = requests.recv().await {
            self.handle(request).await;
        }

        self.shutdown().await;
        self.location
    }

    async fn handle(&mut self, request: NavRequest) {
        tracing::trace!("handling {:?} in phase {:?}", request, self.phase);
        let len = self.registry.len();
        match request {
            NavRequest::Forward => {
                self.request((self.current + 1) % len, true).await;
            }
            NavRequest::Backward => {
                self.request((self.current + len - 1) % len, true).await;
            }
            NavRequest::HistoryBack => {
                if self.location.back() {
                    let target = self.location.read_index();
                    self.request(target, false).await;
                }
            }
            NavRequest::HistoryForward => {
                if self.location.forward() {
                    let target = self.location.read_index();
                    self.request(target, false).await;
                }
            }
        }
    }

    /// Process one index change request. `push` records a new history entry;
    /// history-derived requests pass false because their address already
    /// moved.
    async fn request(&mut self, target: usize, push: bool) {
        if self.reload_guard && self.visited.contains(&target) {
            tracing::info!(
                "module index {} was already active this session; a clean environment needs a full reload",
                target
            );
            if push {
                self.location.write_index(target);
            }
            self.send(UiEffect::Reload).await;
            return;
        }

        if !self.reload_guard && self.active.is_some() && target == self.current {
            tracing::debug!("module index {} is already active", target);
            return;
        }

        self.current = target;
        if push {
            self.location.write_index(target);
        }
        self.send(UiEffect::IndexChanged(target)).await;

        self.activate(target).await;

        if self.reload_guard {
            self.visited.insert(target);
        }
    }

    /// Tear down the current demo (best effort) and stand up the target one.
    async fn activate(&mut self, target: usize) {
        self.unload().await;

        self.phase = Phase::Loading;
        match self.load_and_start(target).await {
            Ok(()) => self.phase = Phase::Running,
            Err(e) => {
                tracing::error!("failed to load module at index {}: {}", target, e);
                self.phase = Phase::Idle;
            }
        }
    }

    /// Best-effort unload: the handle is always cleared, even when `stop`
    /// fails or the demo cannot be stopped at all.
    async fn unload(&mut self) {
        let Some(mut demo) = self.active.take() else {
            return;
        };
        self.phase = Phase::Unloading;

        if demo.supports_stop() {
            if let Err(e) = demo.stop().await {
                tracing::error!("error stopping {}: {}", demo.display_name(), e);
            }
        } else {
            tracing::warn!(
                "{} cannot be stopped in place; its resources may leak",
                demo.display_name()
            );
        }

        self.send(UiEffect::Title(LOADING_TITLE.to_string())).await;
    }

    async fn load_and_start(&mut self, target: usize) -> Result<(), LoadError> {
        let Some(identifier) = self.registry.get(target) else {
            return Err(LoadError::IndexOutOfRange(target));
        };
        let identifier = identifier.to_string();

        let mut demo = self.loader.load(&identifier).await?;

        match demo.initialize().await {
            Ok(()) => {}
            Err(DemoError::ControlFlowEscape) => {
                tracing::debug!("{}: startup unwound through its escape; continuing", identifier);
            }
            Err(source) => {
                return Err(LoadError::Init {
                    module: identifier,
                    source,
                })
            }
        }

        let title = demo.display_name().to_string();
        let source_text = demo
            .source_text()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        self.active = Some(demo);
        self.send(UiEffect::Title(title)).await;
        self.send(UiEffect::Source(source_text)).await;
        tracing::info!("{} loaded", identifier);

        if let Some(demo) = self.active.as_mut() {
            if let Err(e) = demo.start().await {
                // The handle stays in place so the next navigation can still
                // tear it down.
                tracing::error!("failed to start {}: {}", identifier, e);
            }
        }
        Ok(())
    }

    /// Final teardown when the session ends (quit or reload).
    async fn shutdown(&mut self) {
        let Some(mut demo) = self.active.take() else {
            return;
        };
        if demo.supports_stop() {
            if let Err(e) = demo.stop().await {
                tracing::warn!("error stopping {} during shutdown: {}", demo.display_name(), e);
            }
        }
        self.phase = Phase::Idle;
    }

    async fn send(&self, effect: UiEffect) {
        // The receiver only disappears while the session is tearing down
        let _ = self.effects.send(effect).await;
    }
}
