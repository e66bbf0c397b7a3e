//! Closed catalog of weatherapi.com condition codes.
//!
//! The vendor documents a fixed table of condition codes (1000..=1282), each
//! with a day wording, a night wording and an icon reference. Decoding is
//! fail-closed: a code outside the table rejects the whole payload instead of
//! mapping to a catch-all.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Error returned when a payload carries a condition code outside the
/// published table.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("unknown condition code {0}")]
pub struct UnknownConditionCode(pub i64);

/// A condition code from the vendor's published table.
///
/// The numeric discriminants are the wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum ConditionCode {
    Sunny = 1000,
    PartlyCloudy = 1003,
    Cloudy = 1006,
    Overcast = 1009,
    Mist = 1030,
    PatchyRainPossible = 1063,
    PatchySnowPossible = 1066,
    PatchySleetPossible = 1069,
    PatchyFreezingDrizzlePossible = 1072,
    ThunderyOutbreaksPossible = 1087,
    BlowingSnow = 1114,
    Blizzard = 1117,
    Fog = 1135,
    FreezingFog = 1147,
    PatchyLightDrizzle = 1150,
    LightDrizzle = 1153,
    FreezingDrizzle = 1168,
    HeavyFreezingDrizzle = 1171,
    PatchyLightRain = 1180,
    LightRain = 1183,
    ModerateRainAtTimes = 1186,
    ModerateRain = 1189,
    HeavyRainAtTimes = 1192,
    HeavyRain = 1195,
    LightFreezingRain = 1198,
    ModerateOrHeavyFreezingRain = 1201,
    LightSleet = 1204,
    ModerateOrHeavySleet = 1207,
    PatchyLightSnow = 1210,
    LightSnow = 1213,
    PatchyModerateSnow = 1216,
    ModerateSnow = 1219,
    PatchyHeavySnow = 1222,
    HeavySnow = 1225,
    IcePellets = 1237,
    LightRainShower = 1240,
    ModerateOrHeavyRainShower = 1243,
    TorrentialRainShower = 1246,
    LightSleetShowers = 1249,
    ModerateOrHeavySleetShowers = 1252,
    LightSnowShowers = 1255,
    ModerateOrHeavySnowShowers = 1258,
    LightShowersOfIcePellets = 1261,
    ModerateOrHeavyShowersOfIcePellets = 1264,
    PatchyLightRainWithThunder = 1273,
    ModerateOrHeavyRainWithThunder = 1276,
    PatchyLightSnowWithThunder = 1279,
    ModerateOrHeavySnowWithThunder = 1282,
}

impl ConditionCode {
    /// Look up a numeric wire code in the table.
    ///
    /// # Errors
    ///
    /// Returns `UnknownConditionCode` for any code the vendor does not
    /// publish.
    pub const fn from_code(code: i64) -> Result<Self, UnknownConditionCode> {
        Ok(match code {
            1000 => Self::Sunny,
            1003 => Self::PartlyCloudy,
            1006 => Self::Cloudy,
            1009 => Self::Overcast,
            1030 => Self::Mist,
            1063 => Self::PatchyRainPossible,
            1066 => Self::PatchySnowPossible,
            1069 => Self::PatchySleetPossible,
            1072 => Self::PatchyFreezingDrizzlePossible,
            1087 => Self::ThunderyOutbreaksPossible,
            1114 => Self::BlowingSnow,
            1117 => Self::Blizzard,
            1135 => Self::Fog,
            1147 => Self::FreezingFog,
            1150 => Self::PatchyLightDrizzle,
            1153 => Self::LightDrizzle,
            1168 => Self::FreezingDrizzle,
            1171 => Self::HeavyFreezingDrizzle,
            1180 => Self::PatchyLightRain,
            1183 => Self::LightRain,
            1186 => Self::ModerateRainAtTimes,
            1189 => Self::ModerateRain,
            1192 => Self::HeavyRainAtTimes,
            1195 => Self::HeavyRain,
            1198 => Self::LightFreezingRain,
            1201 => Self::ModerateOrHeavyFreezingRain,
            1204 => Self::LightSleet,
            1207 => Self::ModerateOrHeavySleet,
            1210 => Self::PatchyLightSnow,
            1213 => Self::LightSnow,
            1216 => Self::PatchyModerateSnow,
            1219 => Self::ModerateSnow,
            1222 => Self::PatchyHeavySnow,
            1225 => Self::HeavySnow,
            1237 => Self::IcePellets,
            1240 => Self::LightRainShower,
            1243 => Self::ModerateOrHeavyRainShower,
            1246 => Self::TorrentialRainShower,
            1249 => Self::LightSleetShowers,
            1252 => Self::ModerateOrHeavySleetShowers,
            1255 => Self::LightSnowShowers,
            1258 => Self::ModerateOrHeavySnowShowers,
            1261 => Self::LightShowersOfIcePellets,
            1264 => Self::ModerateOrHeavyShowersOfIcePellets,
            1273 => Self::PatchyLightRainWithThunder,
            1276 => Self::ModerateOrHeavyRainWithThunder,
            1279 => Self::PatchyLightSnowWithThunder,
            1282 => Self::ModerateOrHeavySnowWithThunder,
            other => return Err(UnknownConditionCode(other)),
        })
    }

    /// The numeric wire code.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// The vendor wording for this condition.
    ///
    /// The vendor publishes separate day and night texts; they differ only
    /// for code 1000 ("Sunny" vs "Clear").
    #[must_use]
    pub const fn description(self, is_day: bool) -> &'static str {
        match self {
            Self::Sunny => {
                if is_day {
                    "Sunny"
                } else {
                    "Clear"
                }
            }
            Self::PartlyCloudy => "Partly cloudy",
            Self::Cloudy => "Cloudy",
            Self::Overcast => "Overcast",
            Self::Mist => "Mist",
            Self::PatchyRainPossible => "Patchy rain possible",
            Self::PatchySnowPossible => "Patchy snow possible",
            Self::PatchySleetPossible => "Patchy sleet possible",
            Self::PatchyFreezingDrizzlePossible => "Patchy freezing drizzle possible",
            Self::ThunderyOutbreaksPossible => "Thundery outbreaks possible",
            Self::BlowingSnow => "Blowing snow",
            Self::Blizzard => "Blizzard",
            Self::Fog => "Fog",
            Self::FreezingFog => "Freezing fog",
            Self::PatchyLightDrizzle => "Patchy light drizzle",
            Self::LightDrizzle => "Light drizzle",
            Self::FreezingDrizzle => "Freezing drizzle",
            Self::HeavyFreezingDrizzle => "Heavy freezing drizzle",
            Self::PatchyLightRain => "Patchy light rain",
            Self::LightRain => "Light rain",
            Self::ModerateRainAtTimes => "Moderate rain at times",
            Self::ModerateRain => "Moderate rain",
            Self::HeavyRainAtTimes => "Heavy rain at times",
            Self::HeavyRain => "Heavy rain",
            Self::LightFreezingRain => "Light freezing rain",
            Self::ModerateOrHeavyFreezingRain => "Moderate or heavy freezing rain",
            Self::LightSleet => "Light sleet",
            Self::ModerateOrHeavySleet => "Moderate or heavy sleet",
            Self::PatchyLightSnow => "Patchy light snow",
            Self::LightSnow => "Light snow",
            Self::PatchyModerateSnow => "Patchy moderate snow",
            Self::ModerateSnow => "Moderate snow",
            Self::PatchyHeavySnow => "Patchy heavy snow",
            Self::HeavySnow => "Heavy snow",
            Self::IcePellets => "Ice pellets",
            Self::LightRainShower => "Light rain shower",
            Self::ModerateOrHeavyRainShower => "Moderate or heavy rain shower",
            Self::TorrentialRainShower => "Torrential rain shower",
            Self::LightSleetShowers => "Light sleet showers",
            Self::ModerateOrHeavySleetShowers => "Moderate or heavy sleet showers",
            Self::LightSnowShowers => "Light snow showers",
            Self::ModerateOrHeavySnowShowers => "Moderate or heavy snow showers",
            Self::LightShowersOfIcePellets => "Light showers of ice pellets",
            Self::ModerateOrHeavyShowersOfIcePellets => "Moderate or heavy showers of ice pellets",
            Self::PatchyLightRainWithThunder => "Patchy light rain with thunder",
            Self::ModerateOrHeavyRainWithThunder => "Moderate or heavy rain with thunder",
            Self::PatchyLightSnowWithThunder => "Patchy light snow with thunder",
            Self::ModerateOrHeavySnowWithThunder => "Moderate or heavy snow with thunder",
        }
    }

    /// The vendor icon reference number for this condition.
    #[must_use]
    pub const fn icon(self) -> u16 {
        match self {
            Self::Sunny => 113,
            Self::PartlyCloudy => 116,
            Self::Cloudy => 119,
            Self::Overcast => 122,
            Self::Mist => 143,
            Self::PatchyRainPossible => 176,
            Self::PatchySnowPossible => 179,
            Self::PatchySleetPossible => 182,
            Self::PatchyFreezingDrizzlePossible => 185,
            Self::ThunderyOutbreaksPossible => 200,
            Self::BlowingSnow => 227,
            Self::Blizzard => 230,
            Self::Fog => 248,
            Self::FreezingFog => 260,
            Self::PatchyLightDrizzle => 263,
            Self::LightDrizzle => 266,
            Self::FreezingDrizzle => 281,
            Self::HeavyFreezingDrizzle => 284,
            Self::PatchyLightRain => 293,
            Self::LightRain => 296,
            Self::ModerateRainAtTimes => 299,
            Self::ModerateRain => 302,
            Self::HeavyRainAtTimes => 305,
            Self::HeavyRain => 308,
            Self::LightFreezingRain => 311,
            Self::ModerateOrHeavyFreezingRain => 314,
            Self::LightSleet => 317,
            Self::ModerateOrHeavySleet => 320,
            Self::PatchyLightSnow => 323,
            Self::LightSnow => 326,
            Self::PatchyModerateSnow => 329,
            Self::ModerateSnow => 332,
            Self::PatchyHeavySnow => 335,
            Self::HeavySnow => 338,
            Self::IcePellets => 350,
            Self::LightRainShower => 353,
            Self::ModerateOrHeavyRainShower => 356,
            Self::TorrentialRainShower => 359,
            Self::LightSleetShowers => 362,
            Self::ModerateOrHeavySleetShowers => 365,
            Self::LightSnowShowers => 368,
            Self::ModerateOrHeavySnowShowers => 371,
            Self::LightShowersOfIcePellets => 374,
            Self::ModerateOrHeavyShowersOfIcePellets => 377,
            Self::PatchyLightRainWithThunder => 386,
            Self::ModerateOrHeavyRainWithThunder => 389,
            Self::PatchyLightSnowWithThunder => 392,
            Self::ModerateOrHeavySnowWithThunder => 395,
        }
    }
}

impl fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description(true))
    }
}

impl TryFrom<i64> for ConditionCode {
    type Error = UnknownConditionCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

/// Fail-closed deserialization: unknown codes reject the payload.
impl<'de> Deserialize<'de> for ConditionCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = i64::deserialize(deserializer)?;
        Self::from_code(code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(ConditionCode::from_code(1000), Ok(ConditionCode::Sunny));
        assert_eq!(ConditionCode::from_code(1030), Ok(ConditionCode::Mist));
        assert_eq!(
            ConditionCode::from_code(1282),
            Ok(ConditionCode::ModerateOrHeavySnowWithThunder)
        );
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(ConditionCode::from_code(999), Err(UnknownConditionCode(999)));
        assert_eq!(
            ConditionCode::from_code(1001),
            Err(UnknownConditionCode(1001))
        );
        assert_eq!(
            UnknownConditionCode(1001).to_string(),
            "unknown condition code 1001"
        );
    }

    #[test]
    fn code_round_trips_through_try_from() {
        for code in [1000, 1063, 1117, 1189, 1237, 1264, 1282] {
            let parsed = ConditionCode::try_from(code).unwrap();
            assert_eq!(parsed.code(), code);
        }
    }

    #[test]
    fn deserialize_accepts_published_codes() {
        let code: ConditionCode = serde_json::from_str("1183").unwrap();
        assert_eq!(code, ConditionCode::LightRain);
    }

    #[test]
    fn deserialize_rejects_unpublished_codes() {
        let err = serde_json::from_str::<ConditionCode>("4711").unwrap_err();
        assert!(err.to_string().contains("unknown condition code 4711"));
    }

    #[test]
    fn deserialize_rejects_non_numeric_codes() {
        assert!(serde_json::from_str::<ConditionCode>("\"sunny\"").is_err());
    }

    #[test]
    fn day_and_night_wording_differ_only_for_clear_sky() {
        assert_eq!(ConditionCode::Sunny.description(true), "Sunny");
        assert_eq!(ConditionCode::Sunny.description(false), "Clear");
        assert_eq!(ConditionCode::LightRain.description(true), "Light rain");
        assert_eq!(ConditionCode::LightRain.description(false), "Light rain");
    }

    #[test]
    fn icon_references() {
        assert_eq!(ConditionCode::Sunny.icon(), 113);
        assert_eq!(ConditionCode::Fog.icon(), 248);
        assert_eq!(ConditionCode::ModerateOrHeavySnowWithThunder.icon(), 395);
    }

    #[test]
    fn display_uses_day_wording() {
        assert_eq!(ConditionCode::PartlyCloudy.to_string(), "Partly cloudy");
    }
}
