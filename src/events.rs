// Messages that flow between the TUI and the lifecycle coordinator
//
// The two components never call each other directly: the TUI pushes
// navigation requests into an mpsc channel the coordinator task drains one at
// a time, and the coordinator pushes UI effects back the other way. Routing
// every request through a single consumer serializes demo transitions - a
// second click while a load is in flight simply queues behind it.

/// A navigation request from the UI layer to the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Step to the next module, wrapping past the end of the registry.
    Forward,
    /// Step to the previous module, wrapping past the start.
    Backward,
    /// Browser-style history navigation: revisit the previous address.
    HistoryBack,
    /// Browser-style history navigation: revisit the next address.
    HistoryForward,
}

/// A UI affordance update emitted by the coordinator.
///
/// The coordinator performs no rendering itself; each transition produces a
/// stream of these and the TUI applies them. Ordering on the channel matches
/// the order the transition produced them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Replace the title text (includes the transitional "Loading..." label).
    Title(String),
    /// Replace the source panel content. `None` means the demo ships no
    /// readable source and the panel shows its fixed placeholder.
    Source(Option<String>),
    /// The current module index changed (status bar bookkeeping).
    IndexChanged(usize),
    /// The target index was already visited this session and needs a clean
    /// environment: restart the whole session instead of activating in place.
    Reload,
}

/// How a TUI session ended, decided by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// User quit; tear everything down.
    Quit,
    /// Coordinator requested a full reload; rebuild the session from the
    /// persisted address.
    Reload,
}
