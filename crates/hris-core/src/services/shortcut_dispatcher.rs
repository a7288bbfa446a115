// ============================================================================
// HRIS Core - Shortcut Dispatcher
// File: crates/hris-core/src/services/shortcut_dispatcher.rs
// ============================================================================
//! Stack-based keyboard navigator.
//!
//! Root shortcuts are active while the stack is empty. Pressing a branch key
//! descends into its children; Escape leaves every level at once, Backspace
//! leaves one. Firing a leaf always returns to the root level.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

use crate::domain::{
    KeyOutcome, KeyPress, Shortcut, ShortcutHint, ShortcutKind, BACKSPACE_KEY, ESCAPE_KEY,
};
use crate::ports::KeySource;
use crate::store::Store;

#[derive(Default)]
struct DispatcherState {
    root: Vec<Shortcut>,
    stack: Vec<Shortcut>,
}

impl DispatcherState {
    fn active(&self) -> &[Shortcut] {
        match self.stack.last() {
            Some(top) => top.children(),
            None => &self.root,
        }
    }
}

pub struct ShortcutDispatcher {
    state: Mutex<DispatcherState>,
    active: Store<Vec<ShortcutHint>>,
    path: Store<Vec<ShortcutHint>>,
    listener_installed: AtomicBool,
}

impl Default for ShortcutDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutDispatcher {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(DispatcherState::default()),
            active: Store::new(Vec::new()),
            path: Store::new(Vec::new()),
            listener_installed: AtomicBool::new(false),
        }
    }

    pub fn with_shortcuts(shortcuts: Vec<Shortcut>) -> Self {
        let dispatcher = Self::new();
        for shortcut in shortcuts {
            dispatcher.register(shortcut);
        }
        dispatcher
    }

    /// Currently selectable shortcuts.
    pub fn active_shortcuts(&self) -> Store<Vec<ShortcutHint>> {
        self.active.clone()
    }

    /// Branches descended into, outermost first.
    pub fn stack(&self) -> Store<Vec<ShortcutHint>> {
        self.path.clone()
    }

    pub fn depth(&self) -> usize {
        self.state.lock().stack.len()
    }

    /// Add a root shortcut. A shortcut with the same key is replaced and the
    /// new one moves to the end of the order.
    pub fn register(&self, shortcut: Shortcut) {
        let mut state = self.state.lock();
        state.root.retain(|existing| existing.key != shortcut.key);
        debug!(key = %shortcut.key, action = %shortcut.action, "Registered shortcut");
        state.root.push(shortcut);
        if state.stack.is_empty() {
            self.publish(&state);
        }
    }

    pub fn unregister(&self, key: &str) {
        let mut state = self.state.lock();
        state.root.retain(|existing| existing.key != key);
        self.publish(&state);
    }

    /// Dispatch one key press.
    pub fn handle_key(&self, key: &KeyPress) -> KeyOutcome {
        if key.is_text_entry() {
            return KeyOutcome::Ignored;
        }

        let mut state = self.state.lock();

        if key.key == ESCAPE_KEY && !state.stack.is_empty() {
            state.stack.clear();
            self.publish(&state);
            return KeyOutcome::Reset;
        }

        if key.key == BACKSPACE_KEY && !state.stack.is_empty() {
            state.stack.pop();
            self.publish(&state);
            return KeyOutcome::Popped {
                depth: state.stack.len(),
            };
        }

        let Some(matched) = state.active().iter().find(|s| s.key == key.key).cloned() else {
            trace!(key = %key.key, "No shortcut bound");
            return KeyOutcome::Unhandled;
        };

        if matched.is_branch() {
            let action = matched.action.clone();
            state.stack.push(matched);
            self.publish(&state);
            debug!(%action, depth = state.stack.len(), "Entered shortcut submenu");
            return KeyOutcome::Entered { action };
        }

        // Run the handler unlocked so it may register or unregister shortcuts
        drop(state);
        if let ShortcutKind::Leaf(Some(handler)) = &matched.kind {
            handler(key);
        }
        self.reset();
        debug!(action = %matched.action, "Fired shortcut");
        KeyOutcome::Fired {
            action: matched.action,
        }
    }

    /// Return to the root level.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.stack.clear();
        self.publish(&state);
    }

    /// Subscribe to the host's key events. Only the first call installs a listener.
    pub fn init_listener(self: &Arc<Self>, source: &mut dyn KeySource) -> bool {
        if self.listener_installed.swap(true, Ordering::SeqCst) {
            return false;
        }
        let dispatcher = Arc::downgrade(self);
        source.add_key_listener(Box::new(move |key| match dispatcher.upgrade() {
            Some(dispatcher) => dispatcher.handle_key(key),
            None => KeyOutcome::Unhandled,
        }));
        true
    }

    fn publish(&self, state: &DispatcherState) {
        self.active
            .set(state.active().iter().map(ShortcutHint::from).collect());
        self.path
            .set(state.stack.iter().map(ShortcutHint::from).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Icon, KeyTarget};
    use crate::ports::ManualKeySource;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl Fn(&KeyPress) + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = count.clone();
        (count, move |_: &KeyPress| {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn press(dispatcher: &ShortcutDispatcher, key: &str) -> KeyOutcome {
        dispatcher.handle_key(&KeyPress::new(key))
    }

    #[test]
    fn test_root_leaf_fires_and_stack_stays_empty() {
        let (count, handler) = counter();
        let dispatcher = ShortcutDispatcher::new();
        dispatcher.register(Shortcut::leaf("d", "Dashboard", Icon::LayoutDashboard, handler));

        let outcome = press(&dispatcher, "d");
        assert_eq!(outcome, KeyOutcome::Fired { action: "Dashboard".into() });
        assert!(outcome.prevents_default());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.depth(), 0);
    }

    #[test]
    fn test_branch_then_child_fires_and_returns_to_root() {
        let (count, handler) = counter();
        let dispatcher = ShortcutDispatcher::new();
        dispatcher.register(Shortcut::branch(
            "g",
            "Go To",
            Icon::Link,
            vec![Shortcut::leaf("d", "Dashboard", Icon::LayoutDashboard, handler)],
        ));

        assert_eq!(press(&dispatcher, "g"), KeyOutcome::Entered { action: "Go To".into() });
        assert_eq!(dispatcher.depth(), 1);
        assert_eq!(dispatcher.active_shortcuts().get()[0].key, "d");

        assert!(matches!(press(&dispatcher, "d"), KeyOutcome::Fired { .. }));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.depth(), 0);
        assert_eq!(dispatcher.active_shortcuts().get()[0].key, "g");
    }

    #[test]
    fn test_empty_branch_enters_submenu_without_choices() {
        let dispatcher = ShortcutDispatcher::with_shortcuts(vec![Shortcut::branch(
            "g",
            "Go To",
            Icon::Link,
            Vec::new(),
        )]);

        assert_eq!(press(&dispatcher, "g"), KeyOutcome::Entered { action: "Go To".into() });
        assert_eq!(dispatcher.depth(), 1);
        assert!(dispatcher.active_shortcuts().get().is_empty());
        assert_eq!(press(&dispatcher, "d"), KeyOutcome::Unhandled);

        assert_eq!(press(&dispatcher, ESCAPE_KEY), KeyOutcome::Reset);
        assert_eq!(dispatcher.active_shortcuts().get()[0].key, "g");
    }

    fn nested() -> ShortcutDispatcher {
        ShortcutDispatcher::with_shortcuts(vec![Shortcut::branch(
            "g",
            "Go To",
            Icon::Link,
            vec![Shortcut::branch(
                "s",
                "Settings",
                Icon::Settings,
                vec![Shortcut::action("p", "Product", Icon::Package)],
            )],
        )])
    }

    #[test]
    fn test_escape_empties_stack_in_one_step() {
        let dispatcher = nested();
        press(&dispatcher, "g");
        press(&dispatcher, "s");
        assert_eq!(dispatcher.depth(), 2);
        assert_eq!(dispatcher.stack().get().len(), 2);

        assert_eq!(press(&dispatcher, ESCAPE_KEY), KeyOutcome::Reset);
        assert_eq!(dispatcher.depth(), 0);
        assert!(dispatcher.stack().get().is_empty());
    }

    #[test]
    fn test_backspace_pops_one_level() {
        let dispatcher = nested();
        press(&dispatcher, "g");
        press(&dispatcher, "s");

        assert_eq!(press(&dispatcher, BACKSPACE_KEY), KeyOutcome::Popped { depth: 1 });
        assert_eq!(dispatcher.active_shortcuts().get()[0].key, "s");
        assert_eq!(press(&dispatcher, BACKSPACE_KEY), KeyOutcome::Popped { depth: 0 });
        assert_eq!(dispatcher.active_shortcuts().get()[0].key, "g");
    }

    #[test]
    fn test_escape_at_root_is_unhandled() {
        let dispatcher = nested();
        let outcome = press(&dispatcher, ESCAPE_KEY);
        assert_eq!(outcome, KeyOutcome::Unhandled);
        assert!(!outcome.prevents_default());
    }

    #[test]
    fn test_backspace_at_root_fires_bound_shortcut() {
        let (count, handler) = counter();
        let dispatcher = ShortcutDispatcher::new();
        dispatcher.register(Shortcut::leaf(BACKSPACE_KEY, "Go Back", Icon::ArrowLeft, handler));

        assert!(matches!(press(&dispatcher, BACKSPACE_KEY), KeyOutcome::Fired { .. }));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_typing_in_text_input_is_ignored() {
        let (count, handler) = counter();
        let dispatcher = ShortcutDispatcher::new();
        dispatcher.register(Shortcut::leaf("g", "Go", Icon::Link, handler));

        for target in [KeyTarget::Input, KeyTarget::TextArea, KeyTarget::Select, KeyTarget::ContentEditable] {
            let outcome = dispatcher.handle_key(&KeyPress::in_target("g", target));
            assert_eq!(outcome, KeyOutcome::Ignored);
        }
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_register_replaces_and_moves_to_end() {
        let (first, first_handler) = counter();
        let (second, second_handler) = counter();
        let dispatcher = ShortcutDispatcher::new();
        dispatcher.register(Shortcut::leaf("a", "First", Icon::File, first_handler));
        dispatcher.register(Shortcut::action("b", "Other", Icon::File));
        dispatcher.register(Shortcut::leaf("a", "Second", Icon::File, second_handler));

        let keys: Vec<_> = dispatcher.active_shortcuts().get().into_iter().map(|h| h.key).collect();
        assert_eq!(keys, vec!["b", "a"]);

        press(&dispatcher, "a");
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_register_while_nested_keeps_active_level() {
        let dispatcher = nested();
        press(&dispatcher, "g");
        dispatcher.register(Shortcut::action("z", "Zen", Icon::EyeOff));

        assert_eq!(dispatcher.active_shortcuts().get()[0].key, "s");
        assert_eq!(press(&dispatcher, "z"), KeyOutcome::Unhandled);
    }

    #[test]
    fn test_unregister_removes_root_shortcut() {
        let dispatcher = nested();
        dispatcher.unregister("g");
        assert!(dispatcher.active_shortcuts().get().is_empty());
        assert_eq!(press(&dispatcher, "g"), KeyOutcome::Unhandled);
    }

    #[test]
    fn test_handler_may_register_shortcuts() {
        let dispatcher = Arc::new(ShortcutDispatcher::new());
        let inner = Arc::downgrade(&dispatcher);
        dispatcher.register(Shortcut::leaf("r", "Register", Icon::Plus, move |_| {
            if let Some(d) = inner.upgrade() {
                d.register(Shortcut::action("n", "New", Icon::File));
            }
        }));

        press(&dispatcher, "r");
        assert_eq!(dispatcher.active_shortcuts().get().len(), 2);
    }

    #[test]
    fn test_listener_installed_once() {
        let dispatcher = Arc::new(nested());
        let mut source = ManualKeySource::new();

        assert!(dispatcher.init_listener(&mut source));
        assert!(!dispatcher.init_listener(&mut source));
        assert_eq!(source.listener_count(), 1);

        let outcomes = source.press(&KeyPress::new("g"));
        assert_eq!(outcomes, vec![KeyOutcome::Entered { action: "Go To".into() }]);
    }
}
