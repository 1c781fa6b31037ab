//! Publish/subscribe event bus.
//!
//! The bus keeps one ordered chain of listeners per [`Event`]. Firing an
//! event runs every listener of its chain, in registration order, against
//! the same mutable context.
//!
//! # Example
//!
//! ```rust
//! use treewalk_core::{Event, EventBus, Listener};
//!
//! #[derive(Default)]
//! struct Data {
//!     message: String,
//! }
//!
//! let mut bus = EventBus::<Data>::new();
//! let shout = Listener::new(|data: &mut Data| {
//!     data.message.make_ascii_uppercase();
//!     Ok(())
//! });
//! bus.register(Event::Start, shout.clone());
//!
//! let mut data = Data { message: "started!".into() };
//! assert!(bus.fire(Event::Start, &mut data).unwrap());
//! assert_eq!(data.message, "STARTED!");
//!
//! bus.unregister(Event::Start, Some(&shout));
//! assert!(!bus.has_listeners(Event::Start));
//! ```

use std::rc::Rc;

use crate::{Event, TraversalError, WalkError};

/// Result returned by listeners.
///
/// Returning an error aborts the current firing, and inside a walk routes
/// the error through the `error` event.
pub type ListenerResult = Result<(), TraversalError>;

/// A registered callback.
///
/// Listeners are reference counted: clones share identity, so the handle
/// kept at registration time can later remove the listener.
pub struct Listener<C> {
    callback: Rc<dyn Fn(&mut C) -> ListenerResult>,
}

impl<C> Listener<C> {
    /// Wraps a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut C) -> ListenerResult + 'static,
    {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Returns true if both handles refer to the same callback.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }

    /// Invokes the callback.
    #[inline]
    pub fn call(&self, context: &mut C) -> ListenerResult {
        (self.callback)(context)
    }
}

impl<C> Clone for Listener<C> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<C> std::fmt::Debug for Listener<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("callback", &Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

/// Listener registry with one ordered chain per event.
///
/// `C` is the context type handed to listeners. The walker uses
/// [`WalkContext`](crate::WalkContext); standalone buses can use any type.
pub struct EventBus<C> {
    chains: [Vec<Listener<C>>; Event::COUNT],
}

impl<C> EventBus<C> {
    /// Creates a bus with empty chains.
    pub fn new() -> Self {
        Self {
            chains: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Appends `listener` to the chain of `event`.
    pub fn register(&mut self, event: Event, listener: Listener<C>) -> &mut Self {
        self.chains[event.index()].push(listener);
        self
    }

    /// Wraps `callback` in a listener, registers it and returns the handle.
    pub fn on<F>(&mut self, event: Event, callback: F) -> Listener<C>
    where
        F: Fn(&mut C) -> ListenerResult + 'static,
    {
        let listener = Listener::new(callback);
        self.register(event, listener.clone());
        listener
    }

    /// Registers a listener by event name.
    ///
    /// Fails with [`WalkError::InvalidArgument`] for unknown names.
    pub fn register_named(
        &mut self,
        name: &str,
        listener: Listener<C>,
    ) -> Result<&mut Self, WalkError> {
        let event = name.parse()?;
        Ok(self.register(event, listener))
    }

    /// Removes a listener from the chain of `event`.
    ///
    /// With `Some(listener)`, only the first registration of that listener is
    /// removed (nothing happens if it is not registered). With `None`, the
    /// whole chain is cleared.
    pub fn unregister(&mut self, event: Event, listener: Option<&Listener<C>>) -> &mut Self {
        let chain = &mut self.chains[event.index()];
        match listener {
            Some(listener) => {
                if let Some(pos) = chain.iter().position(|l| l.ptr_eq(listener)) {
                    chain.remove(pos);
                }
            }
            None => chain.clear(),
        }
        self
    }

    /// Removes a listener by event name. See [`EventBus::unregister`].
    pub fn unregister_named(
        &mut self,
        name: &str,
        listener: Option<&Listener<C>>,
    ) -> Result<&mut Self, WalkError> {
        let event = name.parse()?;
        Ok(self.unregister(event, listener))
    }

    /// Fires `event` with `context`.
    ///
    /// Returns `Ok(false)` without touching the context when the chain is
    /// empty. Otherwise runs every listener in registration order and returns
    /// `Ok(true)`. The first listener error stops the chain and is returned.
    pub fn fire(&self, event: Event, context: &mut C) -> Result<bool, TraversalError> {
        let chain = &self.chains[event.index()];
        if chain.is_empty() {
            return Ok(false);
        }

        for listener in chain {
            listener.call(context)?;
        }
        Ok(true)
    }

    /// Fires `event` with a freshly defaulted context.
    pub fn fire_default(&self, event: Event) -> Result<bool, TraversalError>
    where
        C: Default,
    {
        if !self.has_listeners(event) {
            return Ok(false);
        }
        self.fire(event, &mut C::default())
    }

    /// Fires an event by name. See [`EventBus::fire`].
    pub fn fire_named(&self, name: &str, context: &mut C) -> Result<bool, WalkError> {
        let event = name.parse()?;
        Ok(self.fire(event, context)?)
    }

    /// Returns the number of listeners registered for `event`.
    #[inline]
    pub fn listener_count(&self, event: Event) -> usize {
        self.chains[event.index()].len()
    }

    /// Returns true if `event` has at least one listener.
    #[inline]
    pub fn has_listeners(&self, event: Event) -> bool {
        !self.chains[event.index()].is_empty()
    }

    /// Returns true if no listener is registered for any event.
    pub fn is_empty(&self) -> bool {
        self.chains.iter().all(Vec::is_empty)
    }

    /// Removes every listener of every event.
    pub fn clear(&mut self) {
        for chain in &mut self.chains {
            chain.clear();
        }
    }
}

impl<C> Default for EventBus<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for EventBus<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for event in Event::ALL {
            map.entry(&event.name(), &self.listener_count(event));
        }
        map.finish()
    }
}
