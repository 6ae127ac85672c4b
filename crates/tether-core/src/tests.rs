#[cfg(test)]
mod tests {
    use crate::effects::*;
    use crate::scope::*;
    use crate::semantics::*;
    use crate::signal::*;
    use crate::state::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = sig.subscribe({
            let seen = seen.clone();
            move |v| seen.borrow_mut().push(*v)
        });

        sig.set(42);
        assert!(!sig.set_if_changed(42));
        sig.unsubscribe(id);
        sig.set(7);
        assert_eq!(*seen.borrow(), vec![42]);
        assert_eq!(sig.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_may_read_signal() {
        let sig = signal(1);
        let doubled = Rc::new(Cell::new(0));
        sig.subscribe({
            let sig = sig.clone();
            let doubled = doubled.clone();
            move |_| doubled.set(sig.get() * 2)
        });
        sig.set(21);
        assert_eq!(doubled.get(), 42);
    }

    #[test]
    fn test_dispose_runs_once() {
        let runs = Rc::new(Cell::new(0));
        let d = Dispose::new({
            let runs = runs.clone();
            move || runs.set(runs.get() + 1)
        });
        let d2 = d.clone();
        d.run();
        d2.run();
        assert_eq!(runs.get(), 1);
        assert!(d.is_spent());
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let scope = Scope::new();
        let child = scope.child();
        for name in ["first", "second"] {
            let order = order.clone();
            scope.add_disposer(move || order.borrow_mut().push(name));
        }
        child.add_disposer({
            let order = order.clone();
            move || order.borrow_mut().push("child")
        });

        assert_eq!(scope.pending(), 2);
        scope.dispose();
        assert_eq!(*order.borrow(), vec!["child", "second", "first"]);

        // Reusable after dispose.
        scope.add_disposer({
            let order = order.clone();
            move || order.borrow_mut().push("again")
        });
        scope.dispose();
        assert_eq!(order.borrow().last(), Some(&"again"));
    }

    #[test]
    fn test_scope_drop_runs_cleanup() {
        let cleaned_up = Rc::new(Cell::new(false));
        {
            let scope = Scope::new();
            let cleaned_up = cleaned_up.clone();
            scope.adopt(on_unmount(move || cleaned_up.set(true)));
        }
        assert!(cleaned_up.get());
    }

    #[test]
    fn test_uncontrolled_state() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let open = Controllable::uncontrolled(false).with_on_change({
            let changes = changes.clone();
            move |v: &bool| changes.borrow_mut().push(*v)
        });
        assert!(!open.is_controlled());

        open.toggle();
        open.set(true);
        open.toggle();
        assert!(!open.get());
        assert_eq!(*changes.borrow(), vec![true, false]);
    }

    #[test]
    fn test_controlled_state_only_requests() {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let open = Controllable::controlled(false, {
            let requests = requests.clone();
            move |v: &bool| requests.borrow_mut().push(*v)
        });
        let notified = Rc::new(Cell::new(0));
        open.subscribe({
            let notified = notified.clone();
            move |_| notified.set(notified.get() + 1)
        });

        open.set(true);
        assert!(!open.get());
        assert_eq!(notified.get(), 0);

        open.sync(true);
        assert!(open.get());
        assert_eq!(notified.get(), 1);

        // Equal to current: no request.
        open.set(true);
        assert_eq!(*requests.borrow(), vec![true]);
    }

    #[test]
    fn test_semantics_attributes() {
        let mut s = Semantics::new(Role::Button);
        s.has_popup = Some(Role::Dialog);
        s.expanded = Some(false);
        s.controls = Some("popover-1".into());
        assert_eq!(
            s.attributes(),
            vec![
                ("role", "button".to_string()),
                ("aria-haspopup", "dialog".to_string()),
                ("aria-expanded", "false".to_string()),
                ("aria-controls", "popover-1".to_string()),
            ]
        );
    }
}
