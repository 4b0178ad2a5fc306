use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Garment size labels, smallest first.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SizeLabel {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

impl SizeLabel {
    pub const ALL: [SizeLabel; 6] = [
        SizeLabel::XS,
        SizeLabel::S,
        SizeLabel::M,
        SizeLabel::L,
        SizeLabel::XL,
        SizeLabel::XXL,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeLabel::XS => "XS",
            SizeLabel::S => "S",
            SizeLabel::M => "M",
            SizeLabel::L => "L",
            SizeLabel::XL => "XL",
            SizeLabel::XXL => "XXL",
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| format!("unknown size label: {}", s))
    }
}

/// One row of the size chart as it is seeded in the page script.
/// All measurements are centimetres.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SeedRecord {
    pub size: SizeLabel,
    pub lp: u32,
    pub lph: u32,
    pub hip: u32,
    pub pc: u32,
    pub fr: u32,
}

impl SeedRecord {
    pub const fn new(size: SizeLabel, lp: u32, lph: u32, hip: u32, pc: u32, fr: u32) -> Self {
        SeedRecord {
            size,
            lp,
            lph,
            hip,
            pc,
            fr,
        }
    }

    /// Measurement fields in the order the page script declares them.
    pub fn fields(&self) -> [(&'static str, u32); 5] {
        [
            ("lp", self.lp),
            ("lph", self.lph),
            ("hip", self.hip),
            ("pc", self.pc),
            ("fr", self.fr),
        ]
    }
}

pub fn default_seed() -> Vec<SeedRecord> {
    vec![
        SeedRecord::new(SizeLabel::XS, 68, 54, 82, 100, 30),
        SeedRecord::new(SizeLabel::S, 70, 56, 84, 100, 31),
        SeedRecord::new(SizeLabel::M, 76, 59, 86, 100, 32),
        SeedRecord::new(SizeLabel::L, 78, 60, 90, 100, 32),
        SeedRecord::new(SizeLabel::XL, 80, 60, 92, 100, 32),
        SeedRecord::new(SizeLabel::XXL, 82, 62, 96, 100, 33),
    ]
}

/// Returns the first size label that appears more than once.
pub fn duplicate_size(records: &[SeedRecord]) -> Option<SizeLabel> {
    let mut seen = Vec::with_capacity(records.len());
    for record in records {
        if seen.contains(&record.size) {
            return Some(record.size);
        }
        seen.push(record.size);
    }
    None
}
