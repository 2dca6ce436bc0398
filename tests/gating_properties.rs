//! Property tests for the equality gate.

use bindable::prelude::*;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn counting_notifier() -> (ChangeNotifier, Rc<Cell<usize>>, SubscriptionHandle) {
    let notifier = ChangeNotifier::new();
    let count = Rc::new(Cell::new(0usize));
    let count_clone = Rc::clone(&count);
    let handle = notifier.subscribe(move |_| count_clone.set(count_clone.get() + 1));
    (notifier, count, handle)
}

proptest! {
    #[test]
    fn equal_values_never_mutate_or_notify(a in any::<i32>()) {
        let (notifier, count, _handle) = counting_notifier();
        let mut slot = a;

        prop_assert!(!notifier.set(&mut slot, a, "value"));
        prop_assert_eq!(slot, a);
        prop_assert_eq!(count.get(), 0);
    }

    #[test]
    fn unequal_values_assign_and_notify_once(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        let (notifier, count, _handle) = counting_notifier();
        let mut slot = a;

        prop_assert!(notifier.set(&mut slot, b, "value"));
        prop_assert_eq!(slot, b);
        prop_assert_eq!(count.get(), 1);
    }

    #[test]
    fn repeated_set_notifies_on_first_call_only(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        let (notifier, count, _handle) = counting_notifier();
        let mut slot = a;

        prop_assert!(notifier.set(&mut slot, b, "value"));
        prop_assert!(!notifier.set(&mut slot, b, "value"));
        prop_assert_eq!(slot, b);
        prop_assert_eq!(count.get(), 1);
    }

    #[test]
    fn strings_gate_by_content_not_allocation(s in ".*") {
        let (notifier, count, _handle) = counting_notifier();
        let mut slot = s.clone();

        prop_assert!(!notifier.set(&mut slot, s.clone(), "value"));
        prop_assert_eq!(&slot, &s);
        prop_assert_eq!(count.get(), 0);
    }

    #[test]
    fn every_listener_fires_once_per_change(n in 1usize..16, a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        let notifier = ChangeNotifier::new();
        let count = Rc::new(Cell::new(0usize));

        let mut handles = Vec::new();
        for _ in 0..n {
            let count_clone = Rc::clone(&count);
            handles.push(notifier.subscribe(move |_| count_clone.set(count_clone.get() + 1)));
        }

        let mut slot = a;
        prop_assert!(notifier.set(&mut slot, b, "value"));
        prop_assert_eq!(count.get(), n);
    }
}
