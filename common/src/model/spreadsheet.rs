use serde::{Deserialize, Serialize};

/// A spreadsheet document accessible through the linked account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spreadsheet {
    pub id: String,
    pub name: String,
}

/// A named tab inside a spreadsheet. Test cases are read from and written to
/// one sheet at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetInfo {
    pub id: u64,
    pub name: String,
}
