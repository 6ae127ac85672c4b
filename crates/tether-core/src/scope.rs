use std::cell::RefCell;
use std::rc::Rc;

use crate::Dispose;

/// Owner of cleanups for one piece of UI.
///
/// Cleanups run on `dispose()` or, failing that, when the last handle is
/// dropped. Children are torn down before their parent's own cleanups.
pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    disposers: RefCell<Vec<Box<dyn FnOnce()>>>,
    children: RefCell<Vec<Scope>>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                disposers: RefCell::new(Vec::new()),
                children: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        self.inner.disposers.borrow_mut().push(Box::new(disposer));
    }

    /// Ties an existing guard to this scope.
    pub fn adopt(&self, d: Dispose) {
        self.add_disposer(move || d.run());
    }

    pub fn child(&self) -> Scope {
        let child = Scope::new();
        self.inner.children.borrow_mut().push(child.clone());
        child
    }

    /// Number of cleanups still pending here, children excluded.
    pub fn pending(&self) -> usize {
        self.inner.disposers.borrow().len()
    }

    /// Runs every pending cleanup. The scope stays usable afterwards.
    pub fn dispose(&self) {
        self.inner.teardown();
    }
}

impl ScopeInner {
    fn teardown(&self) {
        // Dispose children first
        let children = std::mem::take(&mut *self.children.borrow_mut());
        for child in children {
            child.dispose();
        }

        // Run disposers in reverse registration order.
        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        for disposer in disposers.into_iter().rev() {
            disposer();
        }
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        self.teardown();
    }
}
