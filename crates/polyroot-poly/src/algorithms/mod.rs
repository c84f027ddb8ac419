//! Transforms over whole polynomials.

pub mod square_free;
