//! Read/write-closure-backed reference wrapper.
//!
//! [`IndirectReference`] owns no storage of its own: it captures a getter
//! and a setter that together denote some shared mutable location (a
//! [`BoxedCell`](crate::BoxedCell), a field of a struct, a derived
//! sub-field). Multiple references built over the same location observe each
//! other's writes. [`Lens`] names one sub-field of a structured value so a
//! reference can be narrowed to it.

use std::rc::Rc;

/// A shared mutable view into storage owned elsewhere.
///
/// # Example
///
/// ```
/// use cellkit::{BoxedCell, IndirectReference, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let cell = BoxedCell::new(Point { x: 1, y: 2 });
/// let point = cell.as_indirect();
/// let x = point.focus(Lens::new(|p: &Point| p.x, |p, x| p.x = x));
///
/// x.set(10);
/// assert_eq!(cell.get(), Point { x: 10, y: 2 });
/// ```
pub struct IndirectReference<V> {
    read: Rc<dyn Fn() -> V>,
    write: Rc<dyn Fn(V)>,
}

impl<V> IndirectReference<V> {
    /// Build a reference from a getter/setter pair closing over shared
    /// storage.
    pub fn new(read: impl Fn() -> V + 'static, write: impl Fn(V) + 'static) -> Self {
        Self {
            read: Rc::new(read),
            write: Rc::new(write),
        }
    }

    /// Read the current value through the captured getter.
    pub fn get(&self) -> V {
        (self.read)()
    }

    /// Write a value through the captured setter.
    pub fn set(&self, value: V) {
        (self.write)(value)
    }

    /// Read, transform, write back.
    pub fn update(&self, f: impl FnOnce(&mut V)) {
        let mut value = self.get();
        f(&mut value);
        self.set(value);
    }
}

impl<V: 'static> IndirectReference<V> {
    /// Narrow this reference to the sub-field named by `lens`.
    ///
    /// The derived read composes this reference's read with the lens getter.
    /// The derived write reads the whole value, applies the lens setter, and
    /// writes the whole value back, leaving sibling fields untouched.
    pub fn focus<U: 'static>(&self, lens: Lens<V, U>) -> IndirectReference<U> {
        let reader = self.clone();
        let writer = self.clone();
        let read_lens = lens.clone();
        IndirectReference::new(
            move || read_lens.get(&reader.get()),
            move |part| {
                let mut whole = writer.get();
                lens.put(&mut whole, part);
                writer.set(whole);
            },
        )
    }
}

impl<V> Clone for IndirectReference<V> {
    fn clone(&self) -> Self {
        Self {
            read: Rc::clone(&self.read),
            write: Rc::clone(&self.write),
        }
    }
}

/// A getter/setter pair identifying one sub-field of a structured value.
pub struct Lens<V, U> {
    get: Rc<dyn Fn(&V) -> U>,
    set: Rc<dyn Fn(&mut V, U)>,
}

impl<V, U> Lens<V, U> {
    /// Build a lens from an explicit getter and setter for one field.
    pub fn new(get: impl Fn(&V) -> U + 'static, set: impl Fn(&mut V, U) + 'static) -> Self {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// Extract the sub-field from `source`.
    pub fn get(&self, source: &V) -> U {
        (self.get)(source)
    }

    /// Store `part` into the sub-field of `target`.
    pub fn put(&self, target: &mut V, part: U) {
        (self.set)(target, part)
    }
}

impl<V, U> Clone for Lens<V, U> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            set: Rc::clone(&self.set),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, PartialEq, Debug)]
    struct Account {
        name: String,
        balance: i64,
    }

    fn shared_account() -> (Rc<RefCell<Account>>, IndirectReference<Account>) {
        let storage = Rc::new(RefCell::new(Account {
            name: "ada".into(),
            balance: 100,
        }));
        let reader = Rc::clone(&storage);
        let writer = Rc::clone(&storage);
        let reference = IndirectReference::new(
            move || reader.borrow().clone(),
            move |account| *writer.borrow_mut() = account,
        );
        (storage, reference)
    }

    #[test]
    fn two_references_over_one_location_alias() {
        let (_, first) = shared_account();
        let second = first.clone();

        first.update(|account| account.balance = 50);
        assert_eq!(second.get().balance, 50);
    }

    #[test]
    fn get_and_set_delegate_to_the_captured_closures() {
        let (storage, reference) = shared_account();

        reference.set(Account {
            name: "grace".into(),
            balance: 1,
        });
        assert_eq!(storage.borrow().name, "grace");
        assert_eq!(reference.get().balance, 1);
    }

    #[test]
    fn focused_reference_reads_only_its_field() {
        let (_, account) = shared_account();
        let balance = account.focus(Lens::new(|a: &Account| a.balance, |a, b| a.balance = b));

        assert_eq!(balance.get(), 100);
    }

    #[test]
    fn focused_write_leaves_sibling_fields_untouched() {
        let (storage, account) = shared_account();
        let balance = account.focus(Lens::new(|a: &Account| a.balance, |a, b| a.balance = b));

        balance.set(7);

        assert_eq!(storage.borrow().balance, 7);
        assert_eq!(storage.borrow().name, "ada");
    }

    #[test]
    fn focused_reference_observes_writes_to_the_whole() {
        let (_, account) = shared_account();
        let balance = account.focus(Lens::new(|a: &Account| a.balance, |a, b| a.balance = b));

        account.set(Account {
            name: "ada".into(),
            balance: 999,
        });
        assert_eq!(balance.get(), 999);
    }
}
