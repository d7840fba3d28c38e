//! Format converters
//!
//! This module contains readers for external music notation formats.

pub mod musicxml;
