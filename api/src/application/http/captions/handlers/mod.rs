pub mod get_captions;
