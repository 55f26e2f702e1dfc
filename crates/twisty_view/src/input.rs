//! Pointer listener registration.
//!
//! Each engine owns the handles for the listeners it registers, so several
//! engines can share one host without removing each other's listeners.

use std::fmt;

use smallvec::SmallVec;

/// Where a listener is installed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The element that the puzzle is drawn in.
    Element,
    /// The whole window, so that drags continue outside the element.
    Window,
}

/// Kind of pointer event that a listener receives.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer button pressed.
    Down,
    /// Pointer moved.
    Move,
    /// Pointer button released.
    Up,
}

/// Handle to a listener registered with an [`InputHost`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);
impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener {}", self.0)
    }
}

/// Host that delivers pointer events to the engine.
pub trait InputHost {
    /// Starts delivering events of `kind` from `target`. Returns a handle that
    /// is unique among listeners currently registered.
    fn add_listener(&mut self, target: ListenerTarget, kind: PointerEventKind) -> ListenerId;
    /// Stops delivering events for a listener.
    fn remove_listener(&mut self, id: ListenerId);
}

/// Listeners that one engine has registered.
#[derive(Debug, PartialEq, Eq)]
pub struct InputSubscription {
    listeners: SmallVec<[ListenerId; 3]>,
}
impl InputSubscription {
    /// Listeners that an engine needs: presses on the element, and moves and
    /// releases anywhere in the window.
    pub const LISTENERS: [(ListenerTarget, PointerEventKind); 3] = [
        (ListenerTarget::Element, PointerEventKind::Down),
        (ListenerTarget::Window, PointerEventKind::Move),
        (ListenerTarget::Window, PointerEventKind::Up),
    ];

    /// Registers the engine's listeners with `host`.
    pub fn register(host: &mut impl InputHost) -> Self {
        let listeners = Self::LISTENERS
            .into_iter()
            .map(|(target, kind)| host.add_listener(target, kind))
            .collect();
        Self { listeners }
    }

    /// Removes exactly the listeners that [`Self::register()`] added.
    pub fn unregister(self, host: &mut impl InputHost) {
        for id in self.listeners {
            host.remove_listener(id);
        }
    }

    /// Returns the registered listener handles.
    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }
}
