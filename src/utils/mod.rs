pub mod item_import;
pub mod student_id;

pub use item_import::{ItemImportRow, parse_item_rows};
pub use student_id::validate_student_id;
