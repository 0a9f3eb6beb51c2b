use std::fmt;

use chrono::NaiveDate;

/// Class period options offered by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassPeriod {
    EightA,
    EightB,
    SevenA,
    SevenB,
    SixA,
    SixB,
    All,
}

impl ClassPeriod {
    pub const ALL: [Self; 7] = [
        Self::EightA,
        Self::EightB,
        Self::SevenA,
        Self::SevenB,
        Self::SixA,
        Self::SixB,
        Self::All,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EightA => "8A",
            Self::EightB => "8B",
            Self::SevenA => "7A",
            Self::SevenB => "7B",
            Self::SixA => "6A",
            Self::SixB => "6B",
            Self::All => "All",
        }
    }
}

impl fmt::Display for ClassPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar lesson metadata collected from the user. Fields are independent
/// and live for a single generation request.
#[derive(Clone, Debug)]
pub struct LessonForm {
    pub date: NaiveDate,
    pub class_period: ClassPeriod,
    pub class_name: String,
    pub instructor: String,
    pub unit_number: u32,
    pub unit_name: String,
    pub lesson_number: u32,
    pub lesson_name: String,
    pub standard: String,
    pub objective: String,
    pub description: String,
}
