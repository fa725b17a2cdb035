pub mod build_vocabularies;
pub mod compute_rouge;
pub mod convert_rcdata;
pub mod query_offset_files;
