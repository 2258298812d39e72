//! List reconstruction tests.

mod properties;
mod treeviz;
