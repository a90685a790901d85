// @generated

pub mod parsimony;
