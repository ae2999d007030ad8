//! End-to-end tests over the whole pipeline with in-memory backends.

mod scenarios;
