use parse_display::Display;

/// Indexed write outside `[0, len)`.
#[derive(Clone, Copy, Display, Debug, PartialEq, Eq)]
#[display("index out of bounds: the len is {len} but the index is {index}")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

impl std::error::Error for IndexError {}

/// Rejected [`LinkedList::copy_to`](crate::LinkedList::copy_to).
///
/// Detected before any element is written; the destination is untouched.
#[derive(Clone, Copy, Display, Debug, PartialEq, Eq)]
pub enum CopyError {
    #[display("offset {offset} is out of bounds for a destination of length {len}")]
    Offset { offset: usize, len: usize },
    #[display("destination has room for {available} items after the offset but {needed} are required")]
    Capacity { needed: usize, available: usize },
}

impl std::error::Error for CopyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = IndexError { index: 3, len: 3 };
        assert_eq!(
            e.to_string(),
            "index out of bounds: the len is 3 but the index is 3"
        );
        let e = CopyError::Capacity {
            needed: 3,
            available: 2,
        };
        assert_eq!(
            e.to_string(),
            "destination has room for 2 items after the offset but 3 are required"
        );
    }
}
