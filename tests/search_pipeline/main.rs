//! End-to-end tests for the search pipeline
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Normalization** (what counts as a keyword)
//! - **Tier 2: Ordered Insertion** (lists ranked after every merge)
//! - **Tier 3: Top-K Query** (bounded, deduplicated, tie-aware union)
//! - **Tier 4: Sources and Configuration** (filesystem collaborators, sift.toml)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test search_pipeline
//!
//! # Run specific tier
//! cargo test --test search_pipeline tier3
//! ```



// Tier 2: Ordered Insertion
mod tier2_ordered_insertion;

// Tier 3: Top-K Query
mod tier3_top_k;

// Tier 4: Sources and Configuration
mod tier4_sources;
