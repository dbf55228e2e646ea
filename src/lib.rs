pub mod c_api;
pub mod harness;
pub mod list;
pub mod logger;
pub use c_api::c_api as other_c_api;
pub use harness::harness as other_harness;
pub use list::list as other_list;
pub use logger::logger as other_logger;
#[cfg(test)]
mod tests {
    use crate::other_list::DoublyLinkedList;

    #[test]
    fn it_works() {
        let mut list = DoublyLinkedList::new();
        list.append_value("one").unwrap();
        list.append_value("two").unwrap();
        assert_eq!(list.len(), 2);
        list.remove_all();
        assert!(list.is_empty());
    }
}
