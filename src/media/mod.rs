pub mod data_url;
pub mod detection;

pub use data_url::{DataUrlError, PNG_DATA_URL_PREFIX, decode_data_url, png_data_url};
pub use detection::{PNG_MAGIC, detect_image_mime, is_png};
