//! File loading and conversion into the primitive model

pub mod dxf;
