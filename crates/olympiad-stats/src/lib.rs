//! Statistical utilities for the Olympiad results analysis.
//!
//! This crate provides the descriptive statistics used when summarizing game
//! data, such as the mean and median rating differential of an opening.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use olympiad_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Even-sized datasets
//!
//! The median of an even number of values is the mean of the two middle values:
//!
//! ```
//! use olympiad_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new([200.0, -100.0, 50.0, 0.0]).unwrap();
//! assert_eq!(stats.median, 25.0);
//! ```

pub mod descriptive;
