pub mod spreadsheet;
pub mod test_case;
pub mod user;
