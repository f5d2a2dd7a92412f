pub mod context;
pub mod entities;
pub mod listings;
pub mod pager;
