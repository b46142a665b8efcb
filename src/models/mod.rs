pub mod claim;
pub mod nav_item;
pub mod role;
pub mod staff;
