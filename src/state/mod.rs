//! Client-side application state modules.
//!
//! DESIGN
//! ======
//! State structs are plain data with transition methods; pages wrap them in
//! `RwSignal`s so the transitions stay testable without a reactive runtime.

pub mod draw;
