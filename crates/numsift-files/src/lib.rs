pub mod error;
pub mod list;
pub mod rows;

pub use error::{FilesError, Result};
pub use list::{read_number_list, render_number_list, write_number_list};
pub use rows::{parse_csv_rows, parse_text_rows, read_rows, RowFormat};
