use std::fmt;
use std::str::FromStr;

use crate::error::ParsePlacementError;

/// Side of the trigger a panel sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn mirrored(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Top and bottom stack along y; the cross axis is x.
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Cross-axis alignment against the trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    #[default]
    Center,
    /// Leading edges line up (left edges, or top edges for side placements).
    Start,
    /// Trailing edges line up.
    End,
}

/// Requested (or resolved) position of a floating panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Side with the most room, centred.
    Auto,
    Anchored(Side, Align),
}

impl Default for Placement {
    fn default() -> Self {
        Placement::BOTTOM
    }
}

impl Placement {
    pub const TOP: Placement = Placement::Anchored(Side::Top, Align::Center);
    pub const TOP_START: Placement = Placement::Anchored(Side::Top, Align::Start);
    pub const TOP_END: Placement = Placement::Anchored(Side::Top, Align::End);
    pub const BOTTOM: Placement = Placement::Anchored(Side::Bottom, Align::Center);
    pub const BOTTOM_START: Placement = Placement::Anchored(Side::Bottom, Align::Start);
    pub const BOTTOM_END: Placement = Placement::Anchored(Side::Bottom, Align::End);
    pub const LEFT: Placement = Placement::Anchored(Side::Left, Align::Center);
    pub const LEFT_START: Placement = Placement::Anchored(Side::Left, Align::Start);
    pub const LEFT_END: Placement = Placement::Anchored(Side::Left, Align::End);
    pub const RIGHT: Placement = Placement::Anchored(Side::Right, Align::Center);
    pub const RIGHT_START: Placement = Placement::Anchored(Side::Right, Align::Start);
    pub const RIGHT_END: Placement = Placement::Anchored(Side::Right, Align::End);

    pub const ALL: [Placement; 13] = [
        Placement::TOP,
        Placement::TOP_START,
        Placement::TOP_END,
        Placement::BOTTOM,
        Placement::BOTTOM_START,
        Placement::BOTTOM_END,
        Placement::LEFT,
        Placement::LEFT_START,
        Placement::LEFT_END,
        Placement::RIGHT,
        Placement::RIGHT_START,
        Placement::RIGHT_END,
        Placement::Auto,
    ];

    pub fn side(self) -> Option<Side> {
        match self {
            Placement::Auto => None,
            Placement::Anchored(side, _) => Some(side),
        }
    }

    pub fn align(self) -> Align {
        match self {
            Placement::Auto => Align::Center,
            Placement::Anchored(_, align) => align,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Auto => f.write_str("auto"),
            Placement::Anchored(side, Align::Center) => f.write_str(side.name()),
            Placement::Anchored(side, Align::Start) => write!(f, "{}-start", side.name()),
            Placement::Anchored(side, Align::End) => write!(f, "{}-end", side.name()),
        }
    }
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "auto" {
            return Ok(Placement::Auto);
        }
        let (side, align) = match s.split_once('-') {
            Some((side, "start")) => (side, Align::Start),
            Some((side, "end")) => (side, Align::End),
            Some(_) => return Err(ParsePlacementError(s.to_string())),
            None => (s, Align::Center),
        };
        let side = match side {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            _ => return Err(ParsePlacementError(s.to_string())),
        };
        Ok(Placement::Anchored(side, align))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Placement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Placement {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for p in Placement::ALL {
            assert_eq!(p.to_string().parse::<Placement>(), Ok(p));
        }
        assert_eq!("bottom-start".parse(), Ok(Placement::BOTTOM_START));
        assert_eq!(Placement::LEFT_END.to_string(), "left-end");
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!("middle".parse::<Placement>().is_err());
        assert!("top-middle".parse::<Placement>().is_err());
        assert!("auto-start".parse::<Placement>().is_err());
        assert_eq!(
            "".parse::<Placement>(),
            Err(ParsePlacementError(String::new()))
        );
    }

    #[test]
    fn mirrored_sides() {
        assert_eq!(Side::Top.mirrored(), Side::Bottom);
        assert_eq!(Side::Right.mirrored(), Side::Left);
        assert_eq!(Side::Left.mirrored().mirrored(), Side::Left);
    }
}
