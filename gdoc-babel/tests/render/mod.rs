//! HTML rendering tests.

mod images;
mod inline;
mod lists;
mod properties;
