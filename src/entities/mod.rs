//! Concrete record types, one per dashboard screen

pub mod macros;

pub mod category;
pub mod color;
pub mod faq;
pub mod order;
pub mod product;
pub mod seed;
pub mod subscription;

pub use category::{Category, SubCategory, delete_category, sub_categories_of};
pub use color::{Color, active_colors};
pub use faq::Faq;
pub use order::{Order, OrderStatus};
pub use product::{Product, Variant};
pub use subscription::Package;
