use strum_macros::Display;

#[repr(C)]
#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum FieldType {
    Empty,
    Numbered(u8),
    Mine,
}

impl FieldType {
    pub fn from_adjacent_mines(value: u8) -> FieldType {
        match value {
            0 => FieldType::Empty,
            _ => FieldType::Numbered(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &FieldType::Empty
    }

    pub fn is_mine(&self) -> bool {
        self == &FieldType::Mine
    }

    pub fn is_numbered(&self) -> bool {
        matches!(self, FieldType::Numbered(_))
    }

    /// Number of mines around the field, `None` for a mine.
    pub fn adjacent_mines(&self) -> Option<u8> {
        match self {
            FieldType::Empty => Some(0),
            FieldType::Numbered(x) => Some(*x),
            FieldType::Mine => None,
        }
    }

    pub fn get_char_repr(&self) -> char {
        match self {
            FieldType::Empty => ' ',
            FieldType::Numbered(x) => char::from(b'0' + *x),
            FieldType::Mine => 'X',
        }
    }
}
