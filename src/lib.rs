//! Two textbook sequence containers.
//!
//! - [`DynamicArray`]: a contiguous growable array that doubles when full and
//!   halves once it falls to a third full.
//! - [`DoublyLinkedList`]: an arena-backed doubly linked list with index and
//!   value based operations, in-place reversal and a stable merge sort.
//!
//! ```rust
//! use seqds::{DoublyLinkedList, DynamicArray};
//!
//! let mut arr = DynamicArray::with_capacity(4).unwrap();
//! for i in 1..=5 {
//!     arr.add(i);
//! }
//! assert_eq!(arr.capacity(), 8);
//!
//! let mut list = DoublyLinkedList::new();
//! list.add_first(10);
//! list.add_last(20);
//! list.add_at(15, 1).unwrap();
//! assert_eq!(list.to_string(), "[ 10, 15, 20 ]");
//! ```

pub mod dynamic_array;
pub mod error;
pub mod linked_list;

pub use dynamic_array::DynamicArray;
pub use error::{Error, Result};
pub use linked_list::DoublyLinkedList;
