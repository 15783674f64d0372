use ibm_codepage::encoding::ReferenceEncoding;
use prettytable::{cell, format, row, Cell, Row, Table};

/// The text shown for one byte
pub fn cell_text(chr: Option<char>, hex: bool) -> String {
    match chr {
        None => String::new(),
        Some(chr) if hex => format!("{:04X}", chr as u32),
        Some(chr) if chr.is_control() => format!("{:?}", chr),
        Some(chr) => chr.to_string(),
    }
}

/// Lay out all 256 bytes of an encoding as a 16x16 table
pub fn chmap_table(reference: &ReferenceEncoding, hex: bool) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

    table.set_titles(row![
        "", "_0", "_1", "_2", "_3", "_4", "_5", "_6", "_7", "_8", "_9", "_a", "_b", "_c", "_d",
        "_e", "_f"
    ]);

    for (index, chars) in reference.chars().chunks(16).enumerate() {
        let mut cells = Vec::with_capacity(17);
        cells.push(Cell::new(&format!("{:x}_", index)));
        for chr in chars {
            cells.push(Cell::new(&cell_text(*chr, hex)));
        }
        table.add_row(Row::new(cells));
    }
    table
}
