//! Integration tests for the processor module
//!
//! Run the full conversion against synthetic exports written to scratch
//! directories.
