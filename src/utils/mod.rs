pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{get_api_key, get_catalog_base_url, get_data_dir};
pub use paths::{
    decode_record_id, encode_record_id, format_path_with_tilde, record_file_name,
    validate_file_size,
};
pub use terminal::{sanitize_line, truncate_line};
