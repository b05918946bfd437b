//! Benchmark host for the densolve workspace.
