/// The model module contains all core simulation structures
pub mod cost;
pub mod engine;
pub mod error;
pub mod fuel;
pub mod machine;
