pub mod page;
pub mod table;

pub use page::Pager;
pub use table::Table;
