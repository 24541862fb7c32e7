pub mod clock;
pub mod controller;
pub mod function;
pub mod tangent;
