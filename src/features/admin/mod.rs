//! Operator review of customers and applications. The screens are gated on the
//! cached admin flag; the backend enforces the actual permission.

pub mod review;
