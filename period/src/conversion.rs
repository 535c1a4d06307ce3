use std::convert::TryFrom;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ParseError, ParseErrors};
use crate::interval::Interval;
use crate::parser;
use crate::period::Period;

impl FromStr for Period {
    type Err = ParseErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parser::parse_period(s) }
}

impl<'a> TryFrom<&'a str> for Period {
    type Error = ParseErrors;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> { parser::parse_period(value) }
}

impl TryFrom<String> for Period {
    type Error = ParseErrors;

    fn try_from(value: String) -> Result<Self, Self::Error> { parser::parse_period(&value) }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parser::parse_interval(s) }
}

impl TryFrom<String> for Interval {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> { parser::parse_interval(&value) }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self { interval.to_string() }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> { serializer.collect_str(self) }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parser::parse_period(&text).map_err(de::Error::custom)
    }
}
