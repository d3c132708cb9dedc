//! Integration tests for Layer 2: Grammar
//!
//! Tests the number grammar, the standard unit catalog, and the
//! conversion-query parser.

mod numbers;
mod queries;
