// Numeric mode addresses: "<noteCount>.<familyIndex>.<rotation>".
//
// The rotation part is 1-based on the wire and clamped into the family's
// range when resolved, so "7.1.99" is Locrian and "7.1.0" is Ionian.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::scale::ModeFamily;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Not exactly three dot-separated parts.
    Malformed { input: String },
    NotANumber { input: String, part: String },
    UnknownFamily { note_count: u8, family_index: u8 },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { input } => {
                write!(f, "'{}' is not of the form notes.family.mode", input)
            }
            Self::NotANumber { input, part } => {
                write!(f, "'{}': '{}' is not a number", input, part)
            }
            Self::UnknownFamily { note_count, family_index } => {
                write!(f, "no family {}.{}", note_count, family_index)
            }
        }
    }
}

impl std::error::Error for AddressError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub note_count: u8,
    pub family_index: u8,
    /// 1-based, unclamped.
    pub rotation: i64,
}

impl Address {
    pub fn new(note_count: u8, family_index: u8, rotation: i64) -> Self {
        Self { note_count, family_index, rotation }
    }

    /// Find the family and the clamped 0-based rotation.
    pub fn resolve<'c>(
        &self,
        catalog: &'c Catalog,
    ) -> Result<(&'c ModeFamily, usize), AddressError> {
        let family = catalog
            .family_by_address(self.note_count, self.family_index)
            .ok_or(AddressError::UnknownFamily {
                note_count: self.note_count,
                family_index: self.family_index,
            })?;
        Ok((family, family.clamp_rotation(self.rotation.saturating_sub(1))))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(AddressError::Malformed { input: s.to_string() });
        }
        let not_a_number = |part: &str| AddressError::NotANumber {
            input: s.to_string(),
            part: part.to_string(),
        };
        let note_count = parts[0].parse::<u8>().map_err(|_| not_a_number(parts[0]))?;
        let family_index = parts[1].parse::<u8>().map_err(|_| not_a_number(parts[1]))?;
        let rotation = parse_rotation(parts[2]).ok_or_else(|| not_a_number(parts[2]))?;
        Ok(Self { note_count, family_index, rotation })
    }
}

/// Rotations only get clamped later, so a numeric part too long for `i64`
/// saturates rather than failing.
fn parse_rotation(part: &str) -> Option<i64> {
    match part.parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.note_count, self.family_index, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("7.1.2".parse::<Address>(), Ok(Address::new(7, 1, 2)));
        assert_eq!(" 5 . 3 . 1 ".parse::<Address>(), Ok(Address::new(5, 3, 1)));
        assert_eq!(Address::new(12, 1, 1).to_string(), "12.1.1");
    }

    #[test]
    fn test_parse_rejects() {
        assert!(matches!("7.1".parse::<Address>(), Err(AddressError::Malformed { .. })));
        assert!(matches!("7.1.1.1".parse::<Address>(), Err(AddressError::Malformed { .. })));
        assert!(matches!("".parse::<Address>(), Err(AddressError::Malformed { .. })));
        assert!(matches!(
            "7.x.1".parse::<Address>(),
            Err(AddressError::NotANumber { ref part, .. }) if part == "x"
        ));
        assert!(matches!("7..1".parse::<Address>(), Err(AddressError::NotANumber { .. })));
        assert!(matches!("-7.1.1".parse::<Address>(), Err(AddressError::NotANumber { .. })));
    }

    #[test]
    fn test_resolve_clamps_rotation() {
        let catalog = Catalog::builtin();
        let (fam, rot) = Address::new(7, 1, 2).resolve(catalog).unwrap();
        assert_eq!((fam.name(), rot), ("Major", 1));
        let (_, rot) = Address::new(7, 1, 99).resolve(catalog).unwrap();
        assert_eq!(rot, 6);
        let (_, rot) = Address::new(7, 1, 0).resolve(catalog).unwrap();
        assert_eq!(rot, 0);
        let (_, rot) = Address::new(7, 1, -5).resolve(catalog).unwrap();
        assert_eq!(rot, 0);
    }

    #[test]
    fn test_huge_rotation_saturates() {
        let addr: Address = "7.1.99999999999999999999".parse().unwrap();
        assert_eq!(addr.rotation, i64::MAX);
        let (_, rot) = addr.resolve(Catalog::builtin()).unwrap();
        assert_eq!(rot, 6);
        let addr: Address = "7.1.-99999999999999999999".parse().unwrap();
        assert_eq!(addr.rotation, i64::MIN);
        assert!(matches!("7.1.9x".parse::<Address>(), Err(AddressError::NotANumber { .. })));
    }

    #[test]
    fn test_resolve_unknown_family() {
        let err = Address::new(7, 250, 1).resolve(Catalog::builtin()).unwrap_err();
        assert_eq!(err, AddressError::UnknownFamily { note_count: 7, family_index: 250 });
        assert_eq!(err.to_string(), "no family 7.250");
    }
}
