pub mod cauti;
pub mod clabsi;
