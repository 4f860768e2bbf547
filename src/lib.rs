//! A mutable singly-linked list that reports structural and value changes
//! to registered listeners.
//!
//! [`LinkedList`] owns its chain of nodes exclusively, so the chain is
//! acyclic by construction and released deterministically. Every mutation
//! is described by a [`ListChange`] delivered synchronously, in
//! registration order, to all listeners before the mutating call returns.
//!
//! ```
//! use obslist::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.subscribe(|change| println!("{}: {:?}", change.kind(), change.new_items()));
//! list.push(1);
//! list.push(2);
//! list.set(0, 10).unwrap();
//! assert_eq!(list.to_vec(), vec![10, 2]);
//! ```
//!
//! The list is single-threaded by design. Cursors and iterators borrow the
//! chain, so structural mutation while one is outstanding is rejected at
//! compile time.

mod cursor;
mod error;
mod event;
mod list;

pub use cursor::*;
pub use error::*;
pub use event::*;
pub use list::*;
