pub mod column;
pub mod sample;
pub mod sample_type;
pub mod site;
