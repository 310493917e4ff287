pub mod common_affix_len;
pub mod myers_diff;
pub mod string_builder;
