mod entity;
pub use entity::Entity;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
