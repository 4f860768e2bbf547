use parse_display::Display;

/// Immutable description of one completed mutation of a [`LinkedList`](crate::LinkedList).
///
/// Structural variants carry owned before/after snapshots of the whole
/// list; [`ListChange::Set`] carries only the two values involved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListChange<T> {
    /// An item was appended at the tail.
    Insert { new_items: Vec<T>, old_items: Vec<T> },
    /// The first item equal to the requested value was unlinked.
    Remove { new_items: Vec<T>, old_items: Vec<T> },
    /// The value at one position was overwritten.
    Set { new_value: T, old_value: T },
    /// The whole chain was released. The post-clear state is always empty.
    Clear { old_items: Vec<T> },
}

/// The kind of mutation a [`ListChange`] describes.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Insert,
    Remove,
    Set,
    Clear,
}

impl<T> ListChange<T> {
    pub fn kind(&self) -> ChangeKind {
        match self {
            ListChange::Insert { .. } => ChangeKind::Insert,
            ListChange::Remove { .. } => ChangeKind::Remove,
            ListChange::Set { .. } => ChangeKind::Set,
            ListChange::Clear { .. } => ChangeKind::Clear,
        }
    }

    /// List contents after the mutation, if this variant carries a snapshot.
    pub fn new_items(&self) -> Option<&[T]> {
        match self {
            ListChange::Insert { new_items, .. } | ListChange::Remove { new_items, .. } => {
                Some(new_items)
            }
            ListChange::Clear { .. } => Some(&[]),
            ListChange::Set { .. } => None,
        }
    }

    /// List contents before the mutation, if this variant carries a snapshot.
    pub fn old_items(&self) -> Option<&[T]> {
        match self {
            ListChange::Insert { old_items, .. }
            | ListChange::Remove { old_items, .. }
            | ListChange::Clear { old_items } => Some(old_items),
            ListChange::Set { .. } => None,
        }
    }

    /// The written value of a [`ListChange::Set`].
    pub fn new_value(&self) -> Option<&T> {
        match self {
            ListChange::Set { new_value, .. } => Some(new_value),
            _ => None,
        }
    }

    /// The overwritten value of a [`ListChange::Set`].
    pub fn old_value(&self) -> Option<&T> {
        match self {
            ListChange::Set { old_value, .. } => Some(old_value),
            _ => None,
        }
    }
}

/// Identifies a listener registered with
/// [`LinkedList::subscribe`](crate::LinkedList::subscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerKey(pub(crate) usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_payload_accessors() {
        let change = ListChange::Insert {
            new_items: vec![1, 2],
            old_items: vec![1],
        };
        assert_eq!(change.kind(), ChangeKind::Insert);
        assert_eq!(change.new_items(), Some(&[1, 2][..]));
        assert_eq!(change.old_items(), Some(&[1][..]));
        assert_eq!(change.new_value(), None);
        assert_eq!(change.old_value(), None);
    }

    #[test]
    fn set_has_values_not_snapshots() {
        let change = ListChange::Set {
            new_value: 5,
            old_value: 3,
        };
        assert_eq!(change.kind(), ChangeKind::Set);
        assert_eq!(change.new_value(), Some(&5));
        assert_eq!(change.old_value(), Some(&3));
        assert_eq!(change.new_items(), None);
        assert_eq!(change.old_items(), None);
    }

    #[test]
    fn clear_post_state_is_empty() {
        let change: ListChange<i32> = ListChange::Clear {
            old_items: vec![1, 2, 3],
        };
        assert_eq!(change.new_items(), Some(&[][..]));
        assert_eq!(change.old_items(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn kind_display() {
        assert_eq!(ChangeKind::Insert.to_string(), "Insert");
        assert_eq!(ChangeKind::Clear.to_string(), "Clear");
    }
}
