//! Whole-run export tests.
