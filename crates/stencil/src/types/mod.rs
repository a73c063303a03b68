//! Core value types shared by the template codec.

mod value;

pub use value::Value;
