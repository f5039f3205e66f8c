//! Numeric backend for the Dilemma tournament pipeline.
//!
//! This crate provides the small set of statistical routines the result
//! engine depends on:
//!
//! - **Descriptive statistics**: mean, population variance, and population
//!   standard deviation of a dataset
//! - **Eigenvector computation**: dominant eigenvector of a square matrix via
//!   power iteration, tolerant of signed entries
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`eigen`]: Dominant-eigenvector computation for prestige ratings
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use dilemma_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.variance, 2.0);
//! ```
//!
//! ## Computing a dominant eigenvector
//!
//! ```
//! use dilemma_stats::eigen;
//!
//! let matrix = vec![vec![2.0, 0.0], vec![0.0, 1.0]];
//! let vector = eigen::dominant_eigenvector(&matrix).unwrap();
//! assert!((vector[0] - 1.0).abs() < 1e-6);
//! assert!(vector[1].abs() < 1e-6);
//! ```

pub mod descriptive;
pub mod eigen;
