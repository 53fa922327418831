//! Key structures.
//!
//! For the moment, only [tokens](token), as formulas are recognised without being built.

pub mod token;
