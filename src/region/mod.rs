//! Coarse geographic region of the user.
//!
//! Games are released per region, so front-ends use it to pick default artwork,
//! system names and preferred dumps. Region is derived from the locale
//! unless user has stored an explicit override.

use std::fmt;
use std::str::FromStr;

pub use self::helper::*;
pub use self::locale::*;

mod codes;
mod helper;
mod locale;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Region {
    NorthAmerica = 0,
    Japan = 1,
    Europe = 2,
    Other = 3,
}

impl Default for Region {
    fn default() -> Self {
        Region::Other
    }
}

impl Region {
    /// from_raw maps stored integer to region. It can't fail.
    /// Values which do not name any region give `Other`.
    pub fn from_raw(value: i64) -> Region {
        match value {
            0 => Region::NorthAmerica,
            1 => Region::Japan,
            2 => Region::Europe,
            _ => Region::Other,
        }
    }

    #[inline]
    pub fn raw(self) -> i64 {
        self as i64
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Japan => "Japan",
            Region::Europe => "Europe",
            Region::Other => "Other Region",
        }
    }

    /// from_region_code classifies ISO 3166-1 alpha-2 country code.
    ///
    /// Hong Kong and Taiwan are treated as Japan, as they get the same releases.
    pub fn from_region_code(code: &str) -> Region {
        if codes::contains(codes::EUROPE, code) {
            Region::Europe
        } else if codes::contains(codes::NORTH_AMERICA, code) {
            Region::NorthAmerica
        } else if codes::contains(codes::JAPAN, code) {
            Region::Japan
        } else {
            Region::Other
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = ();

    /// Accepts short names: `na`, `jpn`, `eu` and `other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let res = match &s.trim().to_ascii_lowercase()[..] {
            "na" => Region::NorthAmerica,
            "jpn" => Region::Japan,
            "eu" => Region::Europe,
            "other" => Region::Other,
            _ => {
                return Err(());
            }
        };
        Ok(res)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
}

impl Continent {
    pub fn from_region_code(code: &str) -> Option<Continent> {
        [
            (codes::AFRICA, Continent::Africa),
            (codes::ANTARCTICA, Continent::Antarctica),
            (codes::ASIA, Continent::Asia),
            (codes::EUROPE, Continent::Europe),
            (codes::NORTH_AMERICA, Continent::NorthAmerica),
            (codes::SOUTH_AMERICA, Continent::SouthAmerica),
            (codes::OCEANIA, Continent::Oceania),
        ].iter()
            .find(|(table, _)| codes::contains(table, code))
            .map(|(_, continent)| *continent)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_can_classify_region_codes() {
        for (i, o) in [
            ("FR", Region::Europe),
            ("de", Region::Europe),
            ("GB", Region::Europe),
            ("RU", Region::Europe),
            ("US", Region::NorthAmerica),
            ("CA", Region::NorthAmerica),
            ("MX", Region::NorthAmerica),
            ("JP", Region::Japan),
            ("HK", Region::Japan),
            ("tw", Region::Japan),
            ("CN", Region::Other),
            ("KR", Region::Other),
            ("BR", Region::Other),
            ("AU", Region::Other),
            ("", Region::Other),
            ("USA", Region::Other),
        ].iter() {
            assert_eq!(Region::from_region_code(i), *o, "code: {:?}", i);
        }
    }

    #[test]
    fn test_raw_values_are_stable() {
        for r in [Region::NorthAmerica, Region::Japan, Region::Europe, Region::Other].iter().cloned() {
            assert_eq!(Region::from_raw(r.raw()), r);
        }
        assert_eq!(Region::NorthAmerica.raw(), 0);
        assert_eq!(Region::Other.raw(), 3);
        assert_eq!(Region::from_raw(-1), Region::Other);
        assert_eq!(Region::from_raw(42), Region::Other);
    }

    #[test]
    fn test_names() {
        assert_eq!(Region::NorthAmerica.name(), "North America");
        assert_eq!(Region::Japan.to_string(), "Japan");
        assert_eq!(Region::Europe.name(), "Europe");
        assert_eq!(Region::Other.name(), "Other Region");
    }

    #[test]
    fn test_can_parse_short_names() {
        assert_eq!("na".parse::<Region>(), Ok(Region::NorthAmerica));
        assert_eq!(" EU ".parse::<Region>(), Ok(Region::Europe));
        assert_eq!("jpn".parse::<Region>(), Ok(Region::Japan));
        assert_eq!("other".parse::<Region>(), Ok(Region::Other));
        assert_eq!("mars".parse::<Region>(), Err(()));
        assert_eq!("jp".parse::<Region>(), Err(()));
        assert_eq!("jap".parse::<Region>(), Err(()));
    }

    #[test]
    fn test_continents() {
        assert_eq!(Continent::from_region_code("BR"), Some(Continent::SouthAmerica));
        assert_eq!(Continent::from_region_code("nz"), Some(Continent::Oceania));
        assert_eq!(Continent::from_region_code("AQ"), Some(Continent::Antarctica));
        assert_eq!(Continent::from_region_code("JP"), Some(Continent::Asia));
        assert_eq!(Continent::from_region_code("XX"), None);
    }
}
