use std::fmt;
use std::str::FromStr;

use crate::error::FixtureError;

/// Dimensions of one test-case pair for a tier: A is n×m, B is m×p.
///
/// The shared inner dimension `m` makes the pair multiplication-compatible
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierDims {
    pub n: usize,
    pub m: usize,
    pub p: usize,
}

/// The fixed, named fixture size tiers.
///
/// The set is closed: every tier carries its dimension triple, and an
/// unsupported name fails at resolution rather than mid-generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Testing,
    Small,
    Medium,
    Large,
    Native,
}

impl Tier {
    /// All tiers in the reference generation order.
    pub const ALL: [Tier; 5] = [
        Tier::Testing,
        Tier::Small,
        Tier::Medium,
        Tier::Large,
        Tier::Native,
    ];

    /// Returns the fixed dimension triple for this tier.
    pub fn dims(&self) -> TierDims {
        match self {
            Tier::Testing => TierDims { n: 16, m: 12, p: 8 },
            Tier::Small => TierDims {
                n: 121,
                m: 180,
                p: 115,
            },
            Tier::Medium => TierDims {
                n: 550,
                m: 620,
                p: 480,
            },
            Tier::Large => TierDims {
                n: 962,
                m: 1012,
                p: 1221,
            },
            Tier::Native => TierDims {
                n: 2500,
                m: 3000,
                p: 2100,
            },
        }
    }

    /// The tier's name, used for lookup and for output file naming.
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Testing => "testing",
            Tier::Small => "small",
            Tier::Medium => "medium",
            Tier::Large => "large",
            Tier::Native => "native",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Tier, FixtureError> {
        match s {
            "testing" => Ok(Tier::Testing),
            "small" => Ok(Tier::Small),
            "medium" => Ok(Tier::Medium),
            "large" => Ok(Tier::Large),
            "native" => Ok(Tier::Native),
            other => Err(FixtureError::UnknownTier(other.to_string())),
        }
    }
}
