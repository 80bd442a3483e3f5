pub mod module_id;
pub mod resolved_input;
pub mod source;
pub mod source_joiner;
